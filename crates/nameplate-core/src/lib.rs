//! Declaration metadata for enumerated types.
//!
//! This crate is the input boundary of the formatting pipeline:
//! - **Schema layer**: [`Repr`], [`Member`], [`Schema`] describe one type's
//!   declared constants and annotations as plain `'static` data
//! - **Trait seam**: [`Enumerated`] is how a value hands its schema and bit
//!   pattern to the formatter
//! - **Registration**: [`define_enum!`] produces both declaratively
//!
//! No formatting logic lives here; see the `nameplate` crate.

mod macros;

#[cfg(test)]
mod macros_tests;

/// Fixed-width integer representation backing an enumerated type.
///
/// Width and signedness drive decimal and hex rendering, and the widening of
/// declared values to `u64` bit patterns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Repr {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl Repr {
    /// Byte width of the representation (1, 2, 4, or 8).
    pub fn width(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::U64 | Self::I64 => 8,
        }
    }

    /// Whether the representation is signed.
    pub fn signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
}

/// One declared constant of an enumerated type.
#[derive(Clone, Copy, Debug)]
pub struct Member {
    /// Declared identifier.
    pub name: &'static str,
    /// Friendly display name, when annotated.
    pub display: Option<&'static str>,
    /// Raw value widened to a 64-bit unsigned bit pattern. Widening
    /// reinterprets, never sign-extends: `-1` on an `i8` repr is `0xFF`.
    pub value: u64,
}

impl Member {
    /// Display name: the friendly override if present, else the identifier.
    pub fn display_name(&self) -> &'static str {
        self.display.unwrap_or(self.name)
    }
}

/// Full declaration of one enumerated type.
///
/// Built at compile time (normally by [`define_enum!`]) and handed to the
/// formatter through [`Enumerated::SCHEMA`]. Member order is declaration
/// order and is significant: flag decomposition scans members from the last
/// declared entry backward, and normal lookup takes the first exact match.
#[derive(Clone, Copy, Debug)]
pub struct Schema {
    /// Underlying integer representation.
    pub repr: Repr,
    /// Whether values decompose as bit-flag combinations.
    pub flags: bool,
    /// Separator between flag names. `", "` unless annotated otherwise.
    pub separator: &'static str,
    /// Declared constants, in declaration order.
    pub members: &'static [Member],
}

/// A type whose values the formatter can render.
///
/// Implementations are normally generated by [`define_enum!`]; a manual impl
/// only has to supply a schema and uphold the `bits` contract.
pub trait Enumerated: 'static {
    /// The type's declaration metadata.
    const SCHEMA: &'static Schema;

    /// Raw bit pattern of this value, zero-extended to 64 bits.
    ///
    /// Sign extension must not occur: an `i8` value `-1` yields `0xFF`, not
    /// `0xFFFF_FFFF_FFFF_FFFF`.
    fn bits(&self) -> u64;
}
