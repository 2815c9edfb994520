use std::ptr;
use std::thread;

use crate::registry::enum_info;
use crate::{EnumInfo, Print};

crate::define_enum! {
    pub enum Fruit: u8 {
        Apple = 0,
        Pear = 1,
    }
}

crate::define_enum! {
    pub enum Veg: u8 {
        Carrot = 0,
    }
}

crate::define_enum! {
    /// Only referenced by the race test, so the first use really is
    /// concurrent.
    pub struct Raced: u64 {
        A = 1,
        B = 2,
    }
    flags;
}

#[test]
fn same_type_resolves_to_the_same_descriptor() {
    let first = enum_info::<Fruit>();
    let second = enum_info::<Fruit>();
    assert!(ptr::eq(first, second));
}

#[test]
fn distinct_types_get_distinct_descriptors() {
    let fruit = enum_info::<Fruit>();
    let veg = enum_info::<Veg>();
    assert!(!ptr::eq(fruit, veg));
    assert_eq!(fruit.member_count(), 2);
    assert_eq!(veg.member_count(), 1);
}

#[test]
fn cached_descriptor_feeds_formatting() {
    assert_eq!(Fruit::Apple.print(), "Apple");
    assert_eq!(Fruit::Pear.print(), "Pear");
    assert_eq!(Veg::Carrot.print(), "Carrot");
    // Same type again after formatting: still the one descriptor.
    assert!(ptr::eq(enum_info::<Fruit>(), enum_info::<Fruit>()));
}

#[test]
fn concurrent_first_use_stores_one_descriptor() {
    let mut seen: Vec<&'static EnumInfo> = Vec::new();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let info = enum_info::<Raced>();
                    assert_eq!(Raced(Raced::A.0 | Raced::B.0).print(), "A, B");
                    info
                })
            })
            .collect();
        for handle in handles {
            seen.push(handle.join().unwrap());
        }
    });
    assert!(seen.windows(2).all(|pair| ptr::eq(pair[0], pair[1])));
}
