use animlist::{DriverFactory, TransitionDriver, TransitionStatus};

/// A clock-driven transition driver with an easing curve.
///
/// The underlying value moves linearly over time; [`TransitionDriver::progress`] reports it
/// through `easing`. A run starts on the first `advance` after `forward`/`reverse`, so drivers
/// created between frames begin animating on the next frame. Turning around mid-flight scales
/// the run time by the remaining distance: an item that is half-way in takes half the duration
/// to leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenDriver {
    value: f32,
    from: f32,
    to: f32,
    start_ms: Option<u64>,
    duration_ms: u64,
    easing: Easing,
    status: TransitionStatus,
}

impl TweenDriver {
    pub fn new(duration_ms: u64, initial_progress: f32, easing: Easing) -> Self {
        let value = initial_progress.clamp(0.0, 1.0);
        Self {
            value,
            from: value,
            to: value,
            start_ms: None,
            duration_ms,
            easing,
            status: if value >= 1.0 {
                TransitionStatus::Completed
            } else {
                TransitionStatus::Dismissed
            },
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The linear (un-eased) value.
    pub fn value(&self) -> f32 {
        self.value
    }

    fn run_to(&mut self, to: f32) {
        self.from = self.value;
        self.to = to;
        self.start_ms = None;
        if self.run_ms() == 0 {
            self.finish();
            return;
        }
        self.status = if to >= 1.0 {
            TransitionStatus::Forward
        } else {
            TransitionStatus::Reverse
        };
    }

    /// Time needed to cover the remaining distance at full-run speed.
    fn run_ms(&self) -> u64 {
        let distance = if self.to > self.from {
            self.to - self.from
        } else {
            self.from - self.to
        };
        let ms = self.duration_ms as f32 * distance;
        let whole = ms as u64;
        if (whole as f32) < ms { whole + 1 } else { whole }
    }

    fn finish(&mut self) {
        self.value = self.to;
        self.status = if self.to >= 1.0 {
            TransitionStatus::Completed
        } else {
            TransitionStatus::Dismissed
        };
    }
}

impl TransitionDriver for TweenDriver {
    fn forward(&mut self) {
        self.run_to(1.0);
    }

    fn reverse(&mut self) {
        self.run_to(0.0);
    }

    fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    fn advance(&mut self, now_ms: u64) {
        if self.status.is_terminal() {
            return;
        }
        let start = *self.start_ms.get_or_insert(now_ms);
        let run_ms = self.run_ms();
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= run_ms {
            self.finish();
            return;
        }
        let t = elapsed as f32 / run_ms as f32;
        self.value = self.from + (self.to - self.from) * t;
    }

    fn progress(&self) -> f32 {
        self.easing.sample(self.value)
    }

    fn status(&self) -> TransitionStatus {
        self.status
    }
}

/// Creates [`TweenDriver`]s sharing one easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenDriverFactory {
    pub easing: Easing,
}

impl TweenDriverFactory {
    pub fn new(easing: Easing) -> Self {
        Self { easing }
    }
}

impl Default for TweenDriverFactory {
    fn default() -> Self {
        Self::new(Easing::Linear)
    }
}

impl DriverFactory for TweenDriverFactory {
    type Driver = TweenDriver;

    fn create(&mut self, duration_ms: u64, initial_progress: f32) -> TweenDriver {
        TweenDriver::new(duration_ms, initial_progress, self.easing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
