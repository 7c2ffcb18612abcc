use alloc::vec::Vec;

use crate::{ActiveItemInfo, Phase, RemovedItemRenderer, TransitionDriver};

pub(crate) enum ActiveKind<R> {
    Incoming,
    Outgoing(RemovedItemRenderer<R>),
}

/// One in-flight transition, keyed by the physical slot it occupies.
pub(crate) struct ActiveItem<R, D> {
    pub(crate) slot: usize,
    pub(crate) kind: ActiveKind<R>,
    pub(crate) driver: D,
}

impl<R, D: TransitionDriver> ActiveItem<R, D> {
    pub(crate) fn incoming(slot: usize, driver: D) -> Self {
        Self {
            slot,
            kind: ActiveKind::Incoming,
            driver,
        }
    }

    pub(crate) fn outgoing(slot: usize, driver: D, renderer: RemovedItemRenderer<R>) -> Self {
        Self {
            slot,
            kind: ActiveKind::Outgoing(renderer),
            driver,
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        match self.kind {
            ActiveKind::Incoming => Phase::Incoming,
            ActiveKind::Outgoing(_) => Phase::Outgoing,
        }
    }

    pub(crate) fn info(&self) -> ActiveItemInfo {
        ActiveItemInfo {
            slot: self.slot,
            phase: self.phase(),
            progress: self.driver.progress(),
            status: self.driver.status(),
        }
    }
}

/// Active items sorted by slot, strictly increasing.
pub(crate) struct ActiveSet<R, D> {
    items: Vec<ActiveItem<R, D>>,
}

impl<R, D> ActiveSet<R, D> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[ActiveItem<R, D>] {
        &self.items
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, ActiveItem<R, D>> {
        self.items.iter_mut()
    }

    fn position(&self, slot: usize) -> Result<usize, usize> {
        self.items.binary_search_by_key(&slot, |it| it.slot)
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&ActiveItem<R, D>> {
        self.position(slot).ok().map(|pos| &self.items[pos])
    }

    pub(crate) fn contains(&self, slot: usize) -> bool {
        self.position(slot).is_ok()
    }

    pub(crate) fn insert(&mut self, item: ActiveItem<R, D>) {
        match self.position(item.slot) {
            Ok(_) => panic!("two active items claim slot {}", item.slot),
            Err(pos) => self.items.insert(pos, item),
        }
    }

    pub(crate) fn remove(&mut self, slot: usize) -> Option<ActiveItem<R, D>> {
        let pos = self.position(slot).ok()?;
        Some(self.items.remove(pos))
    }

    pub(crate) fn remove_at(&mut self, pos: usize) -> ActiveItem<R, D> {
        self.items.remove(pos)
    }

    /// Number of items whose slot is strictly below `slot`.
    pub(crate) fn count_before(&self, slot: usize) -> usize {
        self.items.partition_point(|it| it.slot < slot)
    }

    /// Moves every item at or above `slot` up by `by` slots.
    pub(crate) fn shift_up_from(&mut self, slot: usize, by: usize) {
        let start = self.count_before(slot);
        for item in &mut self.items[start..] {
            item.slot += by;
        }
    }

    /// Moves every item strictly above `slot` down by one slot.
    pub(crate) fn shift_down_after(&mut self, slot: usize) {
        let start = self.items.partition_point(|it| it.slot <= slot);
        for item in &mut self.items[start..] {
            item.slot -= 1;
        }
    }

    /// Keeps the items `keep` accepts, dropping the rest in one pass. Returns how many were
    /// dropped.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&ActiveItem<R, D>) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|it| keep(it));
        before - self.items.len()
    }

    /// Drops every item at or above `slot`, returning how many were dropped.
    pub(crate) fn truncate_from(&mut self, slot: usize) -> usize {
        let keep = self.count_before(slot);
        let dropped = self.items.len() - keep;
        self.items.truncate(keep);
        dropped
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    /// Maps a logical index to its physical slot, treating `self` as the outgoing set.
    ///
    /// Each outgoing item at or before the running position pushes it one slot further. With
    /// slots strictly increasing, `slot[j] - j` is non-decreasing, so the number of items that
    /// push is the partition point of `slot[j] - j <= logical`.
    pub(crate) fn skip_over(&self, logical: usize) -> usize {
        let mut lo = 0usize;
        let mut hi = self.items.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.items[mid].slot - mid <= logical {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        logical.saturating_add(lo)
    }

    pub(crate) fn is_sorted(&self) -> bool {
        self.items.windows(2).all(|w| w[0].slot < w[1].slot)
    }
}
