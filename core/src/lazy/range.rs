use core::iter::FusedIterator;

use tracing::trace;

/// Counts upwards from zero, one number per demand.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range {
    next: usize,
    end: Option<usize>,
}

impl Range {
    pub(crate) fn new(end: Option<usize>) -> Self {
        Self { next: 0, end }
    }
}

impl Iterator for Range {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.end.is_some_and(|end| self.next >= end) {
            return None;
        }
        let current = self.next;
        match current.checked_add(1) {
            Some(next) => self.next = next,
            None => self.end = Some(current),
        }
        trace!(current, "range advanced");
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end {
            Some(end) => {
                let left = end.saturating_sub(self.next);
                (left, Some(left))
            }
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Range {}
