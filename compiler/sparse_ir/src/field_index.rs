//! Dense field positions.

use std::fmt;

/// Position of a field inside its schema.
///
/// Indices are assigned in declaration order starting at 0 and double as the
/// presence-bit address: field `i` lives in group `i / 32`, bit `i % 32`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FieldIndex(u32);

impl FieldIndex {
    /// Number of presence bits per group.
    pub const GROUP_WIDTH: u32 = 32;

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        FieldIndex(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index as `usize`, for slot addressing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Presence group holding this field's bit.
    #[inline]
    pub const fn group(self) -> usize {
        (self.0 / Self::GROUP_WIDTH) as usize
    }

    /// Bit position of this field within its presence group.
    #[inline]
    pub const fn bit(self) -> u32 {
        self.0 % Self::GROUP_WIDTH
    }
}

impl fmt::Debug for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldIndex({})", self.0)
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<usize> for FieldIndex {
    type Error = std::num::TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value).map(FieldIndex)
    }
}
