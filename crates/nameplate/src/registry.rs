//! Global type-keyed descriptor cache.
//!
//! One descriptor per type for the process lifetime: built lazily on the
//! first formatting call, leaked into `'static` storage, immutable from
//! then on. All formatting goes through [`enum_info`].

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use nameplate_core::Enumerated;

use crate::info::EnumInfo;

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, &'static EnumInfo>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Descriptor for `T`, built on first use and cached forever after.
///
/// Concurrent first calls for the same type serialize on the write lock
/// and re-check under it, so exactly one descriptor is ever stored and
/// every caller observes that fully built descriptor. The returned
/// reference is `'static`; no lock is held once this returns.
pub fn enum_info<T: Enumerated>() -> &'static EnumInfo {
    let key = TypeId::of::<T>();
    let cached = REGISTRY
        .read()
        .expect("descriptor registry poisoned")
        .get(&key)
        .copied();
    if let Some(info) = cached {
        return info;
    }

    let mut registry = REGISTRY.write().expect("descriptor registry poisoned");
    *registry
        .entry(key)
        .or_insert_with(|| Box::leak(Box::new(EnumInfo::build(T::SCHEMA))))
}
