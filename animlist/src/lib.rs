//! A headless animated ordered-collection engine.
//!
//! For adapter-level utilities (tween drivers, a frame-loop controller), see the
//! `animlist-adapter` crate.
//!
//! This crate focuses on the bookkeeping a host needs to animate insertions into and removals
//! from a scrollable list or grid: which physical slot renders which logical item, which slots
//! are still animating in or out, and how far along each transition is.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`DriverFactory`] producing [`TransitionDriver`]s (time-based tweens, springs, ...)
//! - a frame loop calling [`AnimatedList::tick`]
//! - renderers for logical items and for removed items
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod active;
mod driver;
mod error;
mod list;
mod options;
mod state;
mod types;


pub use driver::{DriverFactory, ImmediateDriver, TransitionDriver, TransitionStatus};
pub use error::ListError;
pub use list::AnimatedList;
pub use options::{
    AnimatedListOptions, DEFAULT_DURATION_MS, OnChangeCallback, RemovedItemRenderer,
};
pub use state::ListState;
pub use types::{ActiveItemInfo, Phase, SETTLED_PROGRESS, Slot};
