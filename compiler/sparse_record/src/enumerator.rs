//! Ordered walk over a record's set fields.

use std::iter::FusedIterator;

use sparse_ir::{FieldError, FieldIndex, FieldResult};

use crate::record::Record;
use crate::value::Value;

/// Cursor over the set fields of a [`Record`], ascending by index.
///
/// The only position state is `next`, the next field index to examine. Each
/// step masks off the bits below `next` in its presence group, so a whole
/// empty group is skipped in one step without touching its slots. The cursor
/// only moves forward: [`FieldEnumerator::reset`] always fails.
pub struct FieldEnumerator<'r> {
    record: &'r Record,
    next: u32,
    current: Option<FieldIndex>,
}

impl<'r> FieldEnumerator<'r> {
    pub(crate) fn new(record: &'r Record) -> Self {
        FieldEnumerator {
            record,
            next: 0,
            current: None,
        }
    }

    /// Advance to the next set field. Returns `false` once exhausted.
    pub fn move_next(&mut self) -> bool {
        self.current = self.seek();
        self.current.is_some()
    }

    fn seek(&mut self) -> Option<FieldIndex> {
        let groups = self.record.presence();
        loop {
            let at = FieldIndex::from_raw(self.next);
            let pending = groups.get(at.group())?.bits() >> at.bit();
            if pending == 0 {
                self.next = self
                    .next
                    .checked_add(FieldIndex::GROUP_WIDTH - at.bit())?;
                continue;
            }
            let found = self.next + pending.trailing_zeros();
            self.next = found.saturating_add(1);
            return Some(FieldIndex::from_raw(found));
        }
    }

    /// Field under the cursor, or `None` before the first `move_next` and
    /// after exhaustion.
    pub fn current(&self) -> Option<(&'r str, &'r Value)> {
        let field = self.current?;
        let name = self.record.schema().field(field)?.name();
        let value = self.record.get(field).ok()?;
        Some((name, value))
    }

    /// Next field index the cursor will examine.
    pub fn position(&self) -> FieldIndex {
        FieldIndex::from_raw(self.next)
    }

    /// Index under the cursor.
    pub fn current_index(&self) -> Option<FieldIndex> {
        self.current
    }

    /// Rewinding is not supported.
    pub fn reset(&mut self) -> FieldResult<()> {
        Err(FieldError::ResetUnsupported)
    }
}

impl<'r> Iterator for FieldEnumerator<'r> {
    type Item = (&'r str, &'r Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let at = FieldIndex::from_raw(self.next);
        let groups = self.record.presence();
        let here = groups
            .get(at.group())
            .map_or(0, |group| (group.bits() >> at.bit()).count_ones() as usize);
        let later: usize = groups
            .iter()
            .skip(at.group() + 1)
            .map(|group| group.len() as usize)
            .sum();
        (here + later, Some(here + later))
    }
}

impl ExactSizeIterator for FieldEnumerator<'_> {}

impl FusedIterator for FieldEnumerator<'_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
