//! Presence bits.
//!
//! Every field owns one bit that records "explicitly assigned", independent
//! of the stored value. Bits are packed into 32-bit [`PresenceGroup`]s; the
//! [`PresenceAllocator`] hands out slots densely so field `i` always lands in
//! group `i / 32`, bit `i % 32`.

use std::fmt;

use sparse_ir::FieldIndex;

/// Fixed-capacity set of 32 presence bits.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct PresenceGroup(u32);

impl PresenceGroup {
    pub const CAPACITY: u32 = FieldIndex::GROUP_WIDTH;

    pub const EMPTY: PresenceGroup = PresenceGroup(0);

    #[inline]
    pub fn contains(self, bit: u32) -> bool {
        debug_assert!(bit < Self::CAPACITY);
        self.0 & (1 << bit) != 0
    }

    #[inline]
    pub fn insert(&mut self, bit: u32) {
        debug_assert!(bit < Self::CAPACITY);
        self.0 |= 1 << bit;
    }

    #[inline]
    pub fn remove(&mut self, bit: u32) {
        debug_assert!(bit < Self::CAPACITY);
        self.0 &= !(1 << bit);
    }

    /// Number of set bits.
    #[inline]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PresenceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PresenceGroup({:#034b})", self.0)
    }
}

/// Where a field's presence bit lives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PresenceSlot {
    group: u32,
    bit: u32,
}

impl PresenceSlot {
    #[inline]
    pub fn group(self) -> usize {
        self.group as usize
    }

    #[inline]
    pub fn bit(self) -> u32 {
        self.bit
    }
}

/// Dense slot allocator: fills a group before opening the next one.
#[derive(Debug, Default)]
pub struct PresenceAllocator {
    groups: u32,
    next_bit: u32,
}

impl PresenceAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> PresenceSlot {
        if self.groups == 0 || self.next_bit == PresenceGroup::CAPACITY {
            self.groups += 1;
            self.next_bit = 0;
        }
        let slot = PresenceSlot {
            group: self.groups - 1,
            bit: self.next_bit,
        };
        self.next_bit += 1;
        slot
    }

    pub fn finish(self) -> PresenceLayout {
        PresenceLayout {
            groups: self.groups as usize,
        }
    }
}

/// Group count for a schema; each record carries this many groups.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PresenceLayout {
    groups: usize,
}

impl PresenceLayout {
    #[inline]
    pub fn group_count(self) -> usize {
        self.groups
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn allocator_fills_groups_densely() {
        let mut alloc = PresenceAllocator::new();
        let slots: Vec<PresenceSlot> = (0..70).map(|_| alloc.allocate()).collect();
        for (i, slot) in slots.iter().enumerate() {
            let idx = FieldIndex::try_from(i).unwrap();
            assert_eq!(slot.group(), idx.group());
            assert_eq!(slot.bit(), idx.bit());
        }
        assert_eq!(alloc.finish().group_count(), 3);
    }

    #[test]
    fn no_fields_no_groups() {
        assert_eq!(PresenceAllocator::new().finish().group_count(), 0);
    }

    #[test]
    fn exactly_one_full_group() {
        let mut alloc = PresenceAllocator::new();
        for _ in 0..32 {
            alloc.allocate();
        }
        assert_eq!(alloc.finish().group_count(), 1);
    }

    #[test]
    fn group_bits() {
        let mut group = PresenceGroup::EMPTY;
        assert!(group.is_empty());
        group.insert(0);
        group.insert(31);
        assert!(group.contains(0));
        assert!(group.contains(31));
        assert!(!group.contains(1));
        assert_eq!(group.len(), 2);
        group.remove(0);
        assert!(!group.contains(0));
        assert_eq!(group.bits(), 1 << 31);
    }
}
