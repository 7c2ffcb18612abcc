use alloc::sync::Arc;

use crate::ListState;

/// Default duration of insert and remove transitions.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// A callback fired when the list's bookkeeping changes and the host should re-render.
///
/// It receives a snapshot of the state after the change.
pub type OnChangeCallback = Arc<dyn Fn(ListState) + Send + Sync>;

/// Renders an item that already left the backing data, given its fading-out progress.
pub type RemovedItemRenderer<R> = Arc<dyn Fn(f32) -> R + Send + Sync>;

/// Configuration for [`crate::AnimatedList`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct AnimatedListOptions {
    /// Number of items present before any transition runs.
    pub initial_item_count: usize,
    /// Duration used by `insert_item` / `insert_items` when none is given.
    pub insert_duration_ms: u64,
    /// Duration used by `remove_item` / `remove_all_items` when none is given.
    pub remove_duration_ms: u64,
    /// Optional re-render trigger, called after every state-changing operation.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for AnimatedListOptions {
    fn clone(&self) -> Self {
        Self {
            initial_item_count: self.initial_item_count,
            insert_duration_ms: self.insert_duration_ms,
            remove_duration_ms: self.remove_duration_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for AnimatedListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnimatedListOptions")
            .field("initial_item_count", &self.initial_item_count)
            .field("insert_duration_ms", &self.insert_duration_ms)
            .field("remove_duration_ms", &self.remove_duration_ms)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Default for AnimatedListOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl AnimatedListOptions {
    pub fn new(initial_item_count: usize) -> Self {
        Self {
            initial_item_count,
            insert_duration_ms: DEFAULT_DURATION_MS,
            remove_duration_ms: DEFAULT_DURATION_MS,
            on_change: None,
        }
    }

    pub fn with_insert_duration_ms(mut self, duration_ms: u64) -> Self {
        self.insert_duration_ms = duration_ms;
        self
    }

    pub fn with_remove_duration_ms(mut self, duration_ms: u64) -> Self {
        self.remove_duration_ms = duration_ms;
        self
    }

    pub fn with_durations_ms(mut self, insert_ms: u64, remove_ms: u64) -> Self {
        self.insert_duration_ms = insert_ms;
        self.remove_duration_ms = remove_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(ListState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}
