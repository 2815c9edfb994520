//! Declarative registration of enumerated types.
//!
//! `define_enum!` is the compile-time counterpart of runtime constant
//! discovery: it defines the item and derives its [`Schema`](crate::Schema)
//! in one place, so the declaration and the metadata cannot drift apart.

/// Define an enumerated type together with its [`Enumerated`](crate::Enumerated) impl.
///
/// Two shapes:
///
/// - `pub enum Name: repr { Variant = value, .. }` defines a fieldless
///   `#[repr]` enum. Closed: only declared discriminants are expressible.
/// - `pub struct Name: repr { CONSTANT = value, .. }` defines a newtype over
///   the repr with one associated const per declared member. Open: any bit
///   pattern of the repr is a value, which is what flag sets and types with
///   undeclared-value fallback need.
///
/// Either shape accepts, after the member list, the trailers `flags;`
/// (mark the type as a bit-flag set) and `separator = "…";` (override the
/// default `", "` between flag names), in any order. A member may carry a
/// friendly display name with `=> "text"`, which replaces the identifier in
/// formatted output.
///
/// Declaration order is preserved in the schema and is observable: normal
/// formatting returns the first exact match, and flag decomposition scans
/// from the last declared member backward.
///
/// ```
/// nameplate_core::define_enum! {
///     pub enum Weekday: u8 {
///         Sunday = 0,
///         Monday = 1 => "monday",
///     }
/// }
///
/// use nameplate_core::Enumerated;
/// assert_eq!(Weekday::Monday.bits(), 1);
/// assert_eq!(Weekday::SCHEMA.members[1].display_name(), "monday");
/// ```
#[macro_export]
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr $(=> $display:literal)?
            ),* $(,)?
        }
        $($tail:tt)*
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $crate::Enumerated for $name {
            const SCHEMA: &'static $crate::Schema = &$crate::Schema {
                repr: $crate::__define_enum!(@kind $repr),
                flags: $crate::__define_enum!(@flags $($tail)*),
                separator: $crate::__define_enum!(@sep $($tail)*),
                members: &[
                    $(
                        $crate::Member {
                            name: stringify!($variant),
                            display: $crate::__define_enum!(@display $($display)?),
                            value: $crate::__define_enum!(@widen $repr, $value),
                        },
                    )*
                ],
            };

            fn bits(&self) -> u64 {
                $crate::__define_enum!(@widen $repr, *self as $repr)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $repr:ident {
            $(
                $(#[$cmeta:meta])*
                $constant:ident = $value:expr $(=> $display:literal)?
            ),* $(,)?
        }
        $($tail:tt)*
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis struct $name($vis $repr);

        impl $name {
            $(
                $(#[$cmeta])*
                $vis const $constant: Self = Self($value);
            )*
        }

        impl $crate::Enumerated for $name {
            const SCHEMA: &'static $crate::Schema = &$crate::Schema {
                repr: $crate::__define_enum!(@kind $repr),
                flags: $crate::__define_enum!(@flags $($tail)*),
                separator: $crate::__define_enum!(@sep $($tail)*),
                members: &[
                    $(
                        $crate::Member {
                            name: stringify!($constant),
                            display: $crate::__define_enum!(@display $($display)?),
                            value: $crate::__define_enum!(@widen $repr, $value),
                        },
                    )*
                ],
            };

            fn bits(&self) -> u64 {
                $crate::__define_enum!(@widen $repr, self.0)
            }
        }
    };
}

/// Implementation detail of [`define_enum!`].
///
/// `@kind` maps a repr identifier to [`Repr`](crate::Repr); `@widen` emits
/// the cast chain that reinterprets a value of that repr as a `u64` bit
/// pattern (unsigned same-width first, so no sign extension); `@display`
/// lowers the optional `=> "text"` override; `@flags` and `@sep` read the
/// item trailers.
#[doc(hidden)]
#[macro_export]
macro_rules! __define_enum {
    (@kind u8) => { $crate::Repr::U8 };
    (@kind i8) => { $crate::Repr::I8 };
    (@kind u16) => { $crate::Repr::U16 };
    (@kind i16) => { $crate::Repr::I16 };
    (@kind u32) => { $crate::Repr::U32 };
    (@kind i32) => { $crate::Repr::I32 };
    (@kind u64) => { $crate::Repr::U64 };
    (@kind i64) => { $crate::Repr::I64 };

    (@widen u8, $v:expr) => { ($v) as u8 as u64 };
    (@widen i8, $v:expr) => { ($v) as i8 as u8 as u64 };
    (@widen u16, $v:expr) => { ($v) as u16 as u64 };
    (@widen i16, $v:expr) => { ($v) as i16 as u16 as u64 };
    (@widen u32, $v:expr) => { ($v) as u32 as u64 };
    (@widen i32, $v:expr) => { ($v) as i32 as u32 as u64 };
    (@widen u64, $v:expr) => { ($v) as u64 };
    (@widen i64, $v:expr) => { ($v) as i64 as u64 };

    (@display) => { None };
    (@display $text:literal) => { Some($text) };

    (@flags) => { false };
    (@flags flags; $($rest:tt)*) => { true };
    (@flags separator = $sep:literal; $($rest:tt)*) => {
        $crate::__define_enum!(@flags $($rest)*)
    };

    (@sep) => { ", " };
    (@sep flags; $($rest:tt)*) => { $crate::__define_enum!(@sep $($rest)*) };
    (@sep separator = $sep:literal; $($rest:tt)*) => { $sep };
}
