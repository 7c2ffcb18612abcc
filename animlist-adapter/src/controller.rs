use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use animlist::{AnimatedList, AnimatedListOptions, ListState, OnChangeCallback};

use crate::{Easing, TweenDriverFactory};

/// A framework-neutral controller that owns one `animlist::AnimatedList` driven by tweens.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `insert_item` / `remove_item` when the backing data changes
/// - `tick(now_ms)` each frame/timer tick, redrawing whenever it returns `true`
///
/// The host holds the controller and passes it (or `&mut` to it) to whatever needs to insert or
/// remove items.
pub struct Controller<R> {
    list: AnimatedList<R, TweenDriverFactory>,
    frame_requested: Arc<AtomicBool>,
}

impl<R> Controller<R> {
    /// Creates a controller. A host `on_change` in `options` keeps firing; the controller only
    /// chains its own frame request in front of it.
    pub fn new(options: AnimatedListOptions, easing: Easing) -> Self {
        let frame_requested = Arc::new(AtomicBool::new(false));
        let on_change = frame_request_hook(&frame_requested, options.on_change.clone());
        let options = AnimatedListOptions {
            on_change: Some(on_change),
            ..options
        };
        Self {
            list: AnimatedList::new(options, TweenDriverFactory::new(easing)),
            frame_requested,
        }
    }

    pub fn list(&self) -> &AnimatedList<R, TweenDriverFactory> {
        &self.list
    }

    /// Mutable access to the list.
    ///
    /// Replacing the list's `on_change` through this disconnects the controller's frame
    /// requests.
    pub fn list_mut(&mut self) -> &mut AnimatedList<R, TweenDriverFactory> {
        &mut self.list
    }

    pub fn into_list(self) -> AnimatedList<R, TweenDriverFactory> {
        self.list
    }

    pub fn is_animating(&self) -> bool {
        self.list.is_animating()
    }

    pub fn state(&self) -> ListState {
        self.list.state()
    }

    /// Inserts an item at logical `index` with the default insert duration.
    ///
    /// Returns the physical slot of the new item.
    pub fn insert_item(&mut self, index: usize) -> usize {
        self.list.insert_item(index)
    }

    /// Removes the item at logical `index` with the default remove duration.
    ///
    /// Returns the physical slot the item keeps occupying while it animates out.
    pub fn remove_item(
        &mut self,
        index: usize,
        renderer: impl Fn(f32) -> R + Send + Sync + 'static,
    ) -> usize {
        self.list.remove_item(index, renderer)
    }

    /// Marks the next `tick` as needing a frame.
    pub fn request_frame(&self) {
        self.frame_requested.store(true, Ordering::Release);
    }

    /// Returns and clears the pending frame request.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::AcqRel)
    }

    /// Advances every transition to `now_ms` and retires the finished ones.
    ///
    /// Returns `true` when the host should draw a frame: a transition is still running, one just
    /// finished, or the list changed since the last tick.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let retired = self.list.tick(now_ms);
        let requested = self.take_frame_request();
        let animating = self.list.is_animating();
        atrace!(now_ms, retired, requested, animating, "Controller::tick");
        animating || requested || retired > 0
    }
}

impl<R> core::fmt::Debug for Controller<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("list", &self.list)
            .field(
                "frame_requested",
                &self.frame_requested.load(Ordering::Acquire),
            )
            .finish()
    }
}

fn frame_request_hook(flag: &Arc<AtomicBool>, host: Option<OnChangeCallback>) -> OnChangeCallback {
    let flag = Arc::clone(flag);
    Arc::new(move |state: ListState| {
        flag.store(true, Ordering::Release);
        if let Some(cb) = &host {
            cb(state);
        }
    })
}
