//! Precomputed string formatting for enumerated types.
//!
//! A value's type supplies its declaration metadata through the
//! [`Enumerated`] trait, normally written for you by [`define_enum!`]. The
//! first formatting call for a type derives an [`EnumInfo`] descriptor and
//! caches it for the process lifetime; every later call is a map lookup
//! plus one string assembly.
//!
//! Four format kinds, selected by code:
//! - `'G'` (default): declared-name lookup, or flag decomposition when the
//!   type is marked as a flag set
//! - `'F'`: flag decomposition, unconditionally
//! - `'D'`: base-10 at the underlying width and signedness
//! - `'X'`: zero-padded uppercase hex, two digits per byte
//!
//! Values with no declared name never fail to format; they fall back to
//! decimal. The only runtime error is an unrecognized format code.

pub mod format;
pub mod info;
pub mod registry;

#[cfg(test)]
mod registry_tests;

pub use format::{Format, FormatError, Print};
pub use info::EnumInfo;
pub use registry::enum_info;

// Re-export the metadata surface so downstream crates need only this one.
pub use nameplate_core::{Enumerated, Member, Repr, Schema, define_enum};
