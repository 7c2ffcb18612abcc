/// Where a transition driver is in its run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionStatus {
    /// Running toward full progress.
    Forward,
    /// Running toward zero progress.
    Reverse,
    /// Settled at full progress.
    Completed,
    /// Settled at zero progress.
    Dismissed,
}

impl TransitionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Dismissed)
    }

    pub fn is_running(self) -> bool {
        !self.is_terminal()
    }
}

/// An owned handle that drives a normalized progress value over time.
///
/// The list owns every driver exclusively. A driver is released (dropped) the moment the item
/// it animates is retired, and every live driver is dropped when the list is dropped, so any
/// timer or frame subscription a driver holds should be cancelled in its `Drop` impl.
///
/// Completion is reported through [`TransitionDriver::status`]. The list checks statuses in
/// [`crate::AnimatedList::tick`] / [`crate::AnimatedList::settle`], so a driver never calls back
/// into the list.
pub trait TransitionDriver {
    /// Starts running toward full progress from the current progress.
    fn forward(&mut self);

    /// Starts running toward zero progress from the current progress.
    fn reverse(&mut self);

    /// Changes the duration of a full 0..=1 run. Applies to the next `forward`/`reverse`.
    fn set_duration(&mut self, duration_ms: u64);

    /// Advances the driver's clock.
    ///
    /// A driver with a zero duration must reach its terminal status no later than the first
    /// `advance` after `forward`/`reverse`.
    fn advance(&mut self, now_ms: u64);

    /// Current progress in `0.0..=1.0`.
    fn progress(&self) -> f32;

    fn status(&self) -> TransitionStatus;
}

/// Creates transition drivers for the list.
///
/// Implemented for any `FnMut(duration_ms, initial_progress) -> D` closure.
pub trait DriverFactory {
    type Driver: TransitionDriver;

    /// Creates an idle driver sitting at `initial_progress` that runs a full 0..=1 transition
    /// over `duration_ms`.
    fn create(&mut self, duration_ms: u64, initial_progress: f32) -> Self::Driver;
}

impl<D, F> DriverFactory for F
where
    D: TransitionDriver,
    F: FnMut(u64, f32) -> D,
{
    type Driver = D;

    fn create(&mut self, duration_ms: u64, initial_progress: f32) -> D {
        self(duration_ms, initial_progress)
    }
}

/// A driver that ignores durations and settles on its first `advance`.
///
/// Useful for hosts that render without animations, and as a deterministic driver in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImmediateDriver {
    progress: f32,
    status: TransitionStatus,
}

impl ImmediateDriver {
    pub fn new(initial_progress: f32) -> Self {
        let progress = initial_progress.clamp(0.0, 1.0);
        let status = if progress >= 1.0 {
            TransitionStatus::Completed
        } else {
            TransitionStatus::Dismissed
        };
        Self { progress, status }
    }

    /// A factory usable with [`crate::AnimatedList::new`].
    pub fn factory() -> impl FnMut(u64, f32) -> ImmediateDriver {
        |_duration_ms, initial_progress| ImmediateDriver::new(initial_progress)
    }
}

impl TransitionDriver for ImmediateDriver {
    fn forward(&mut self) {
        self.status = TransitionStatus::Forward;
    }

    fn reverse(&mut self) {
        self.status = TransitionStatus::Reverse;
    }

    fn set_duration(&mut self, _duration_ms: u64) {}

    fn advance(&mut self, _now_ms: u64) {
        match self.status {
            TransitionStatus::Forward => {
                self.progress = 1.0;
                self.status = TransitionStatus::Completed;
            }
            TransitionStatus::Reverse => {
                self.progress = 0.0;
                self.status = TransitionStatus::Dismissed;
            }
            TransitionStatus::Completed | TransitionStatus::Dismissed => {}
        }
    }

    fn progress(&self) -> f32 {
        self.progress
    }

    fn status(&self) -> TransitionStatus {
        self.status
    }
}
