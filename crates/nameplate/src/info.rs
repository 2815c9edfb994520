//! Per-type formatting descriptor.
//!
//! Everything the four formatters need is derived from a [`Schema`] exactly
//! once and never touched again; the registry owns the result for the
//! process lifetime.

use nameplate_core::{Repr, Schema};

/// Precomputed formatting metadata for one enumerated type.
///
/// Holds the widened member values and their resolved display names in
/// declaration order, plus the derived flag-decomposition fields: the scan
/// bounds, the zero-value output, and the exact worst-case buffer length.
#[derive(Debug)]
pub struct EnumInfo {
    pub(crate) repr: Repr,
    pub(crate) flags: bool,
    pub(crate) separator: &'static str,
    /// Widened member values, declaration order.
    pub(crate) values: Box<[u64]>,
    /// Resolved display names, parallel to `values`.
    pub(crate) names: Box<[&'static str]>,
    /// Output for a flag-formatted value of exactly zero.
    pub(crate) zero_label: &'static str,
    /// Last member index; the flag scan starts here.
    pub(crate) scan_start: usize,
    /// Scan stops here, inclusive. 1 when index 0 holds the zero value,
    /// so the zero member is never consulted during decomposition.
    pub(crate) scan_end: usize,
    /// Worst-case byte length of flags output: the sum of every display
    /// name length plus one separator each.
    pub(crate) buf_len: usize,
}

impl EnumInfo {
    /// Derive the descriptor from a schema. Pure: no I/O, cannot fail.
    pub(crate) fn build(schema: &'static Schema) -> Self {
        let separator = schema.separator;
        let mut values = Vec::with_capacity(schema.members.len());
        let mut names = Vec::with_capacity(schema.members.len());
        let mut buf_len = 0;
        for member in schema.members {
            let display = member.display_name();
            values.push(member.value);
            names.push(display);
            buf_len += display.len() + separator.len();
        }

        let mut zero_label = "0";
        let mut scan_start = 0;
        let mut scan_end = 0;
        if buf_len > 0 {
            let zero_first = values[0] == 0;
            if zero_first {
                zero_label = names[0];
                scan_end = 1;
            }
            scan_start = values.len() - 1;
        }

        EnumInfo {
            repr: schema.repr,
            flags: schema.flags,
            separator,
            values: values.into_boxed_slice(),
            names: names.into_boxed_slice(),
            zero_label,
            scan_start,
            scan_end,
            buf_len,
        }
    }

    /// Index of the first declared member with this exact value.
    ///
    /// First means earliest in declaration order, which is what resolves
    /// duplicate raw values.
    pub(crate) fn position_of(&self, bits: u64) -> Option<usize> {
        self.values.iter().position(|&value| value == bits)
    }

    /// Underlying integer representation.
    pub fn repr(&self) -> Repr {
        self.repr
    }

    /// Whether `'G'` formatting delegates to flag decomposition.
    pub fn is_flags(&self) -> bool {
        self.flags
    }

    /// Separator inserted between flag names.
    pub fn separator(&self) -> &'static str {
        self.separator
    }

    /// Number of declared members.
    pub fn member_count(&self) -> usize {
        self.values.len()
    }
}
