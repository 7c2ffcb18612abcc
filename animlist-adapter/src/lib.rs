//! Adapter utilities for the `animlist` crate.
//!
//! The `animlist` crate is UI-agnostic and focuses on index bookkeeping. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - A clock-driven tween transition driver with easing curves
//! - A controller that owns one list and tells a frame loop when to redraw
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use tween::{Easing, TweenDriver, TweenDriverFactory};
