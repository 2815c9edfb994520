//! The four formatting algorithms and the format-code dispatcher.
//!
//! All of them operate on an [`EnumInfo`] and a 64-bit bit pattern; the
//! public surface is the [`Print`] extension trait, which resolves the
//! descriptor through the registry and dispatches.

use nameplate_core::{Enumerated, Repr};

use crate::info::EnumInfo;
use crate::registry::enum_info;

/// Parsed formatting code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Format {
    /// `'G'`: declared-name lookup, or flag decomposition for flag sets.
    General,
    /// `'F'`: flag decomposition regardless of the flag marker.
    Flags,
    /// `'D'`: base-10 per the repr's width and signedness.
    Decimal,
    /// `'X'`: zero-padded uppercase hex, two digits per byte of width.
    Hex,
}

impl Format {
    /// Parse a format code, case-insensitively.
    ///
    /// Anything outside `{'G','F','D','X'}` is a [`FormatError`], the only
    /// failure in the formatting path.
    pub fn from_code(code: char) -> Result<Self, FormatError> {
        match code.to_ascii_uppercase() {
            'G' => Ok(Self::General),
            'F' => Ok(Self::Flags),
            'D' => Ok(Self::Decimal),
            'X' => Ok(Self::Hex),
            _ => Err(FormatError { code }),
        }
    }

    /// Canonical (uppercase) code for this format.
    pub fn code(self) -> char {
        match self {
            Self::General => 'G',
            Self::Flags => 'F',
            Self::Decimal => 'D',
            Self::Hex => 'X',
        }
    }
}

/// Rejected format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown format code {code:?}, expected one of 'G', 'F', 'D', 'X'")]
pub struct FormatError {
    /// The code exactly as the caller passed it.
    pub code: char,
}

/// Formatting methods on every [`Enumerated`] type.
pub trait Print: Enumerated + Sized {
    /// Format with default rules: declared-name lookup, or flag
    /// decomposition when the type is marked as a flag set. Values with no
    /// declared name fall back to decimal; this never fails.
    fn print(&self) -> String {
        render(Format::General, enum_info::<Self>(), self.bits())
    }

    /// Format under an explicit code from `{'G','F','D','X'}`,
    /// case-insensitive. An unrecognized code is the only error.
    fn print_as(&self, code: char) -> Result<String, FormatError> {
        let format = Format::from_code(code)?;
        Ok(render(format, enum_info::<Self>(), self.bits()))
    }
}

impl<T: Enumerated> Print for T {}

/// Dispatch one parsed format against a descriptor and a bit pattern.
fn render(format: Format, info: &EnumInfo, bits: u64) -> String {
    match format {
        Format::General if info.flags => flags(info, bits),
        Format::General => general(info, bits),
        Format::Flags => flags(info, bits),
        Format::Decimal => decimal(info.repr, bits),
        Format::Hex => hex(info.repr, bits),
    }
}

/// Declared-name lookup: first exact match in declaration order, decimal
/// fallback for values with no declared name.
fn general(info: &EnumInfo, bits: u64) -> String {
    match info.position_of(bits) {
        Some(index) => info.names[index].to_string(),
        None => decimal(info.repr, bits),
    }
}

/// Base-10 rendering of `bits` reinterpreted at the repr's width and
/// signedness. The `as` casts truncate to the repr's low bytes and never
/// sign-extend on the way in.
fn decimal(repr: Repr, bits: u64) -> String {
    match repr {
        Repr::U8 => (bits as u8).to_string(),
        Repr::I8 => (bits as i8).to_string(),
        Repr::U16 => (bits as u16).to_string(),
        Repr::I16 => (bits as i16).to_string(),
        Repr::U32 => (bits as u32).to_string(),
        Repr::I32 => (bits as i32).to_string(),
        Repr::U64 => bits.to_string(),
        Repr::I64 => (bits as i64).to_string(),
    }
}

/// Uppercase hex at exactly two digits per byte of the repr's width.
fn hex(repr: Repr, bits: u64) -> String {
    match repr.width() {
        1 => format!("{:02X}", bits as u8),
        2 => format!("{:04X}", bits as u16),
        4 => format!("{:08X}", bits as u32),
        _ => format!("{bits:016X}"),
    }
}

/// Greedy backward decomposition into declared flag names.
///
/// Scans from the last declared member toward the first (skipping a zero
/// member at index 0), subtracting every declared value whose bits are all
/// still present in the remainder. Names are prepended, so the scan order
/// leaves matched names in declaration order. A nonzero remainder after
/// the scan means the value does not decompose exactly; the partial result
/// is abandoned and the decimal rendering returned instead.
///
/// Declaration order decides overlaps: an alias declared after its
/// component flags absorbs their bits first, one declared before them
/// loses. That asymmetry is observable, documented behavior.
fn flags(info: &EnumInfo, bits: u64) -> String {
    if info.buf_len == 0 {
        // Nothing declared to decompose against.
        return decimal(info.repr, bits);
    }
    if bits == 0 {
        return info.zero_label.to_string();
    }

    let separator = info.separator.as_bytes();
    let mut buf = vec![0u8; info.buf_len];
    let mut cursor = info.buf_len;
    let mut remaining = bits;

    // scan_end > scan_start only for a lone zero member; the range is
    // empty then, which is exactly the required no-op.
    for index in (info.scan_end..=info.scan_start).rev() {
        let declared = info.values[index];
        if declared != 0 && remaining & declared == declared {
            remaining -= declared;
            let name = info.names[index].as_bytes();
            cursor -= separator.len();
            buf[cursor..cursor + separator.len()].copy_from_slice(separator);
            cursor -= name.len();
            buf[cursor..cursor + name.len()].copy_from_slice(name);
        }
    }

    if remaining != 0 {
        return decimal(info.repr, bits);
    }

    // Shift the used tail to the front and drop the one trailing
    // separator; the buffer then becomes the result string without
    // another allocation.
    buf.drain(..cursor);
    buf.truncate(buf.len() - separator.len());
    String::from_utf8(buf).expect("flag output is concatenated str slices")
}
