use alloc::sync::Arc;
use core::cell::Cell;
use core::fmt;
use core::ops::Range;

use crate::active::{ActiveItem, ActiveKind, ActiveSet};
use crate::{
    ActiveItemInfo, AnimatedListOptions, DriverFactory, ListError, ListState,
    RemovedItemRenderer, SETTLED_PROGRESS, Slot, TransitionDriver, TransitionStatus,
};

type Driver<F> = <F as DriverFactory>::Driver;

/// A headless animated ordered collection.
///
/// The list tracks two index spaces:
/// - *logical* indexes address the caller's backing data;
/// - *physical* slots address what is rendered, which also includes items that already left the
///   backing data but are still animating out.
///
/// `insert_item` / `remove_item` mutate the bookkeeping synchronously. The visual transition then
/// plays out through the [`TransitionDriver`] created for the item; the host advances drivers by
/// calling [`Self::tick`] from its frame loop, and renders physical slots through
/// [`Self::render_slot`] or [`Self::for_each_slot`].
///
/// `R` is whatever the host's renderers produce. The list holds no UI objects.
pub struct AnimatedList<R, F: DriverFactory> {
    options: AnimatedListOptions,
    factory: F,
    item_count: usize,
    incoming: ActiveSet<R, Driver<F>>,
    outgoing: ActiveSet<R, Driver<F>>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<R, F: DriverFactory> AnimatedList<R, F> {
    pub fn new(options: AnimatedListOptions, factory: F) -> Self {
        adebug!(
            item_count = options.initial_item_count,
            insert_duration_ms = options.insert_duration_ms,
            remove_duration_ms = options.remove_duration_ms,
            "AnimatedList::new"
        );
        Self {
            item_count: options.initial_item_count,
            options,
            factory,
            incoming: ActiveSet::new(),
            outgoing: ActiveSet::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &AnimatedListOptions {
        &self.options
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(ListState) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_default_durations_ms(&mut self, insert_ms: u64, remove_ms: u64) {
        self.options.insert_duration_ms = insert_ms;
        self.options.remove_duration_ms = remove_ms;
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self.state());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Physical slot count: logical items plus items still animating out.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of items in the backing data.
    pub fn logical_count(&self) -> usize {
        self.item_count - self.outgoing.len()
    }

    /// Resynchronizes the physical slot count after the backing data changed wholesale.
    ///
    /// Transitions running at or above `item_count` are dropped along with their drivers.
    pub fn set_item_count(&mut self, item_count: usize) {
        if self.item_count == item_count {
            return;
        }
        let _dropped_in = self.incoming.truncate_from(item_count);
        let _dropped_out = self.outgoing.truncate_from(item_count);
        adebug!(
            from = self.item_count,
            to = item_count,
            dropped_in = _dropped_in,
            dropped_out = _dropped_out,
            "set_item_count"
        );
        self.item_count = item_count;
        self.notify();
    }

    pub fn incoming_len(&self) -> usize {
        self.incoming.len()
    }

    pub fn outgoing_len(&self) -> usize {
        self.outgoing.len()
    }

    pub fn is_animating(&self) -> bool {
        !self.incoming.is_empty() || !self.outgoing.is_empty()
    }

    pub fn state(&self) -> ListState {
        ListState {
            item_count: self.item_count,
            incoming: self.incoming.len(),
            outgoing: self.outgoing.len(),
        }
    }

    /// Maps a logical index to the physical slot that renders it.
    ///
    /// `logical_count()` maps to the slot an append would occupy.
    pub fn to_physical(&self, logical: usize) -> usize {
        self.outgoing.skip_over(logical)
    }

    /// Maps a physical slot back to its logical index.
    ///
    /// # Panics
    ///
    /// Panics if `physical` is occupied by an outgoing item, which has no logical counterpart.
    pub fn to_logical(&self, physical: usize) -> usize {
        assert!(
            !self.outgoing.contains(physical),
            "slot {physical} is animating out and has no logical index"
        );
        physical - self.outgoing.count_before(physical)
    }

    /// Same as [`Self::to_logical`], but returns `None` for outgoing or out-of-range slots.
    pub fn try_to_logical(&self, physical: usize) -> Option<usize> {
        if physical >= self.item_count || self.outgoing.contains(physical) {
            return None;
        }
        Some(physical - self.outgoing.count_before(physical))
    }

    /// Inserts an item at `index` using the default insert duration.
    ///
    /// # Panics
    ///
    /// Panics if `index > logical_count()`.
    pub fn insert_item(&mut self, index: usize) -> usize {
        let duration_ms = self.options.insert_duration_ms;
        self.insert_item_with_duration(index, duration_ms)
    }

    /// Inserts an item at `index`, animating it in over `duration_ms`.
    ///
    /// Returns the physical slot of the new item.
    ///
    /// # Panics
    ///
    /// Panics if `index > logical_count()`.
    pub fn insert_item_with_duration(&mut self, index: usize, duration_ms: u64) -> usize {
        match self.try_insert_item(index, duration_ms) {
            Ok(slot) => slot,
            Err(err) => panic!("AnimatedList::insert_item: {err}"),
        }
    }

    pub fn try_insert_item(&mut self, index: usize, duration_ms: u64) -> Result<usize, ListError> {
        let slots = self.try_insert_items(index, 1, duration_ms)?;
        Ok(slots.start)
    }

    /// Inserts `len` consecutive items starting at logical `index`, each animating in.
    ///
    /// Returns the physical slots of the new items.
    ///
    /// # Panics
    ///
    /// Panics if `index > logical_count()`.
    pub fn insert_items(&mut self, index: usize, len: usize, duration_ms: u64) -> Range<usize> {
        match self.try_insert_items(index, len, duration_ms) {
            Ok(slots) => slots,
            Err(err) => panic!("AnimatedList::insert_items: {err}"),
        }
    }

    pub fn try_insert_items(
        &mut self,
        index: usize,
        len: usize,
        duration_ms: u64,
    ) -> Result<Range<usize>, ListError> {
        if index > self.logical_count() {
            let err = ListError::InsertOutOfRange {
                index,
                logical_count: self.logical_count(),
            };
            awarn!(%err, "insert rejected");
            return Err(err);
        }
        let slot = self.to_physical(index);
        if len == 0 {
            return Ok(slot..slot);
        }

        // Displace existing transitions first so the new slots are free.
        self.incoming.shift_up_from(slot, len);
        self.outgoing.shift_up_from(slot, len);

        for s in slot..slot + len {
            let mut driver = self.factory.create(duration_ms, 0.0);
            driver.forward();
            self.incoming.insert(ActiveItem::incoming(s, driver));
        }
        self.item_count += len;
        atrace!(index, slot, len, duration_ms, "insert");
        self.debug_check();
        self.notify();
        Ok(slot..slot + len)
    }

    /// Removes the item at `index` using the default remove duration.
    ///
    /// The item leaves the logical index space immediately; its slot keeps rendering through
    /// `renderer` until the transition finishes.
    ///
    /// # Panics
    ///
    /// Panics if `index >= logical_count()`.
    pub fn remove_item(
        &mut self,
        index: usize,
        renderer: impl Fn(f32) -> R + Send + Sync + 'static,
    ) -> usize {
        let duration_ms = self.options.remove_duration_ms;
        self.remove_item_with_duration(index, renderer, duration_ms)
    }

    /// Removes the item at `index`, animating it out over `duration_ms`.
    ///
    /// Returns the physical slot the item keeps occupying while it animates out.
    ///
    /// # Panics
    ///
    /// Panics if `index >= logical_count()`.
    pub fn remove_item_with_duration(
        &mut self,
        index: usize,
        renderer: impl Fn(f32) -> R + Send + Sync + 'static,
        duration_ms: u64,
    ) -> usize {
        match self.try_remove_item(index, Arc::new(renderer), duration_ms) {
            Ok(slot) => slot,
            Err(err) => panic!("AnimatedList::remove_item: {err}"),
        }
    }

    pub fn try_remove_item(
        &mut self,
        index: usize,
        renderer: RemovedItemRenderer<R>,
        duration_ms: u64,
    ) -> Result<usize, ListError> {
        if index >= self.logical_count() {
            let err = ListError::RemoveOutOfRange {
                index,
                logical_count: self.logical_count(),
            };
            awarn!(%err, "remove rejected");
            return Err(err);
        }
        let slot = self.to_physical(index);
        if self.outgoing.contains(slot) {
            let err = ListError::AlreadyRemoving { slot };
            awarn!(%err, "remove rejected");
            return Err(err);
        }

        // An item still animating in turns around from where it is.
        let mut driver = match self.incoming.remove(slot) {
            Some(item) => {
                atrace!(slot, "remove reuses incoming driver");
                let mut driver = item.driver;
                driver.set_duration(duration_ms);
                driver
            }
            None => self.factory.create(duration_ms, SETTLED_PROGRESS),
        };
        driver.reverse();
        self.outgoing.insert(ActiveItem::outgoing(slot, driver, renderer));
        atrace!(index, slot, duration_ms, "remove");
        self.debug_check();
        self.notify();
        Ok(slot)
    }

    /// Starts a removal for every logical item, animating each out over `duration_ms`.
    ///
    /// Returns the number of removals started.
    pub fn remove_all_items(
        &mut self,
        renderer: impl Fn(f32) -> R + Send + Sync + 'static,
        duration_ms: u64,
    ) -> usize {
        let renderer: RemovedItemRenderer<R> = Arc::new(renderer);
        let count = self.logical_count();
        self.batch_update(|list| {
            for index in (0..count).rev() {
                if let Err(err) = list.try_remove_item(index, Arc::clone(&renderer), duration_ms) {
                    panic!("AnimatedList::remove_all_items: {err}");
                }
            }
        });
        count
    }

    /// Advances every driver to `now_ms`, then retires finished transitions.
    ///
    /// Returns the number of transitions retired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        for item in self.incoming.iter_mut() {
            item.driver.advance(now_ms);
        }
        for item in self.outgoing.iter_mut() {
            item.driver.advance(now_ms);
        }
        self.settle()
    }

    /// Retires every transition whose driver reached its terminal status.
    ///
    /// Finished insertions simply stop animating. Finished removals free their slot: later
    /// transitions shift down by one and `item_count` drops by one.
    pub fn settle(&mut self) -> usize {
        let mut retired = self.incoming.retain(|it| {
            let done = it.driver.status() == TransitionStatus::Completed;
            if done {
                atrace!(slot = it.slot, "insert settled");
            }
            !done
        });

        // Highest slot first: retiring a slot only shifts the ones above it.
        let mut removed_any = false;
        while let Some(pos) = self
            .outgoing
            .as_slice()
            .iter()
            .rposition(|it| it.driver.status() == TransitionStatus::Dismissed)
        {
            let item = self.outgoing.remove_at(pos);
            let slot = item.slot;
            drop(item);
            self.incoming.shift_down_after(slot);
            self.outgoing.shift_down_after(slot);
            self.item_count -= 1;
            atrace!(slot, item_count = self.item_count, "remove settled");
            retired += 1;
            removed_any = true;
        }

        if removed_any {
            self.debug_check();
            self.notify();
        }
        retired
    }

    /// Drops every live driver.
    ///
    /// Pending removals are finalized (their slots disappear); pending insertions become settled
    /// items. Dropping the list releases drivers the same way.
    pub fn release_all(&mut self) {
        if !self.is_animating() {
            return;
        }
        adebug!(
            incoming = self.incoming.len(),
            outgoing = self.outgoing.len(),
            "release_all"
        );
        self.item_count -= self.outgoing.len();
        self.incoming.clear();
        self.outgoing.clear();
        self.notify();
    }

    /// Resolves what physical slot `physical` renders.
    ///
    /// # Panics
    ///
    /// Panics if `physical >= item_count()`.
    pub fn slot(&self, physical: usize) -> Slot {
        self.assert_in_range(physical);
        if let Some(item) = self.outgoing.get(physical) {
            return Slot::Outgoing {
                progress: item.driver.progress(),
            };
        }
        let index = physical - self.outgoing.count_before(physical);
        match self.incoming.get(physical) {
            Some(item) => Slot::Incoming {
                index,
                progress: item.driver.progress(),
            },
            None => Slot::Settled { index },
        }
    }

    /// Renders physical slot `physical`.
    ///
    /// Outgoing slots go through the renderer given to `remove_item`; every other slot goes
    /// through `item(logical_index, progress)`, with progress fixed at
    /// [`SETTLED_PROGRESS`] for items that are not animating.
    ///
    /// # Panics
    ///
    /// Panics if `physical >= item_count()`.
    pub fn render_slot(&self, physical: usize, item: impl FnOnce(usize, f32) -> R) -> R {
        self.assert_in_range(physical);
        if let Some(active) = self.outgoing.get(physical) {
            let progress = active.driver.progress();
            return match &active.kind {
                ActiveKind::Outgoing(renderer) => renderer(progress),
                ActiveKind::Incoming => unreachable!("incoming item in the outgoing set"),
            };
        }
        let index = physical - self.outgoing.count_before(physical);
        let progress = self
            .incoming
            .get(physical)
            .map_or(SETTLED_PROGRESS, |active| active.driver.progress());
        item(index, progress)
    }

    /// Visits every physical slot in `range` (clamped to `item_count`) in ascending order
    /// without allocations.
    pub fn for_each_slot(&self, range: Range<usize>, mut f: impl FnMut(usize, Slot)) {
        let end = range.end.min(self.item_count);
        let start = range.start.min(end);
        let incoming = self.incoming.as_slice();
        let outgoing = self.outgoing.as_slice();
        let mut in_pos = self.incoming.count_before(start);
        let mut out_pos = self.outgoing.count_before(start);

        for physical in start..end {
            if out_pos < outgoing.len() && outgoing[out_pos].slot == physical {
                let progress = outgoing[out_pos].driver.progress();
                out_pos += 1;
                f(physical, Slot::Outgoing { progress });
                continue;
            }
            let index = physical - out_pos;
            if in_pos < incoming.len() && incoming[in_pos].slot == physical {
                let progress = incoming[in_pos].driver.progress();
                in_pos += 1;
                f(physical, Slot::Incoming { index, progress });
            } else {
                f(physical, Slot::Settled { index });
            }
        }
    }

    /// Renders every physical slot in `range` (clamped to `item_count`).
    pub fn for_each_rendered(
        &self,
        range: Range<usize>,
        mut item: impl FnMut(usize, f32) -> R,
        mut f: impl FnMut(usize, R),
    ) {
        let end = range.end.min(self.item_count);
        let start = range.start.min(end);
        for physical in start..end {
            let rendered = self.render_slot(physical, &mut item);
            f(physical, rendered);
        }
    }

    /// Visits every in-flight transition in ascending slot order.
    pub fn for_each_active(&self, mut f: impl FnMut(ActiveItemInfo)) {
        let incoming = self.incoming.as_slice();
        let outgoing = self.outgoing.as_slice();
        let (mut i, mut o) = (0usize, 0usize);
        while i < incoming.len() || o < outgoing.len() {
            let take_incoming = match (incoming.get(i), outgoing.get(o)) {
                (Some(a), Some(b)) => a.slot < b.slot,
                (Some(_), None) => true,
                _ => false,
            };
            if take_incoming {
                f(incoming[i].info());
                i += 1;
            } else {
                f(outgoing[o].info());
                o += 1;
            }
        }
    }

    pub fn active_item_at(&self, physical: usize) -> Option<ActiveItemInfo> {
        self.outgoing
            .get(physical)
            .or_else(|| self.incoming.get(physical))
            .map(ActiveItem::info)
    }

    fn assert_in_range(&self, physical: usize) {
        assert!(
            physical < self.item_count,
            "slot out of range (slot={physical}, item_count={})",
            self.item_count
        );
    }

    fn debug_check(&self) {
        debug_assert!(self.incoming.is_sorted(), "incoming set out of order");
        debug_assert!(self.outgoing.is_sorted(), "outgoing set out of order");
        debug_assert!(
            self.incoming
                .as_slice()
                .iter()
                .all(|it| !self.outgoing.contains(it.slot)),
            "slot is both incoming and outgoing"
        );
        debug_assert!(
            self.incoming
                .as_slice()
                .last()
                .is_none_or(|it| it.slot < self.item_count)
                && self
                    .outgoing
                    .as_slice()
                    .last()
                    .is_none_or(|it| it.slot < self.item_count),
            "active slot past item_count"
        );
    }
}

impl<R, F: DriverFactory> fmt::Debug for AnimatedList<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Slots<'a, R, D>(&'a ActiveSet<R, D>);

        impl<R, D> fmt::Debug for Slots<'_, R, D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries(self.0.as_slice().iter().map(|it| it.slot))
                    .finish()
            }
        }

        f.debug_struct("AnimatedList")
            .field("item_count", &self.item_count)
            .field("incoming", &Slots(&self.incoming))
            .field("outgoing", &Slots(&self.outgoing))
            .field("options", &self.options)
            .finish()
    }
}
