use crate::TransitionStatus;

/// Progress reported for slots that are not animating.
pub const SETTLED_PROGRESS: f32 = 1.0;

/// Which transition an active item is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Recently inserted, animating toward full progress.
    Incoming,
    /// Removed from the backing data, animating toward zero progress.
    Outgoing,
}

/// What a physical slot currently represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slot {
    /// A logical item with no transition running.
    Settled { index: usize },
    /// A logical item that is still animating in.
    Incoming { index: usize, progress: f32 },
    /// An item that already left the backing data and is animating out.
    Outgoing { progress: f32 },
}

impl Slot {
    /// The logical index, or `None` for outgoing slots.
    pub fn logical_index(&self) -> Option<usize> {
        match *self {
            Self::Settled { index } | Self::Incoming { index, .. } => Some(index),
            Self::Outgoing { .. } => None,
        }
    }

    pub fn progress(&self) -> f32 {
        match *self {
            Self::Settled { .. } => SETTLED_PROGRESS,
            Self::Incoming { progress, .. } | Self::Outgoing { progress } => progress,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Settled { .. } => None,
            Self::Incoming { .. } => Some(Phase::Incoming),
            Self::Outgoing { .. } => Some(Phase::Outgoing),
        }
    }

    pub fn is_outgoing(&self) -> bool {
        matches!(self, Self::Outgoing { .. })
    }
}

/// A read-only view of one in-flight transition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveItemInfo {
    /// Physical slot the item occupies.
    pub slot: usize,
    pub phase: Phase,
    pub progress: f32,
    pub status: TransitionStatus,
}
