use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::format;
use std::string::String;

use animlist::{AnimatedListOptions, ListState, Slot, TransitionDriver, TransitionStatus};

#[test]
fn tween_driver_runs_forward_over_its_duration() {
    let mut d = TweenDriver::new(100, 0.0, Easing::Linear);
    d.forward();
    assert_eq!(d.status(), TransitionStatus::Forward);

    // The first advance anchors the clock.
    d.advance(1_000);
    assert_eq!(d.progress(), 0.0);
    d.advance(1_050);
    assert_eq!(d.progress(), 0.5);
    d.advance(1_099);
    assert_eq!(d.status(), TransitionStatus::Forward);
    d.advance(1_100);
    assert_eq!(d.progress(), 1.0);
    assert_eq!(d.status(), TransitionStatus::Completed);
}

#[test]
fn tween_driver_reverses_from_partial_progress_at_full_speed() {
    let mut d = TweenDriver::new(200, 0.0, Easing::Linear);
    d.forward();
    d.advance(0);
    d.advance(100);
    assert_eq!(d.value(), 0.5);

    d.set_duration(200);
    d.reverse();
    assert_eq!(d.status(), TransitionStatus::Reverse);
    d.advance(100);
    assert_eq!(d.value(), 0.5);
    d.advance(150);
    assert_eq!(d.value(), 0.25);
    d.advance(200);
    assert_eq!(d.value(), 0.0);
    assert_eq!(d.status(), TransitionStatus::Dismissed);
}

#[test]
fn zero_duration_tween_finishes_immediately() {
    let mut d = TweenDriver::new(0, 0.0, Easing::SmoothStep);
    d.forward();
    assert_eq!(d.status(), TransitionStatus::Completed);
    assert_eq!(d.progress(), 1.0);

    d.reverse();
    assert_eq!(d.status(), TransitionStatus::Dismissed);
    assert_eq!(d.progress(), 0.0);
}

#[test]
fn easing_curves_pin_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.sample(1.0), 1.0, "{easing:?}");
        let mut last = 0.0f32;
        for i in 0..=20 {
            let v = easing.sample(i as f32 / 20.0);
            assert!(v >= last, "{easing:?} not monotonic");
            last = v;
        }
    }
    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
    assert!(Easing::EaseOutCubic.sample(0.5) > 0.5);
    assert_eq!(Easing::Linear.sample(2.0), 1.0);
}

#[test]
fn controller_insert_settles_after_duration() {
    let mut c: Controller<String> =
        Controller::new(AnimatedListOptions::new(2).with_durations_ms(100, 100), Easing::Linear);
    let slot = c.insert_item(1);
    assert_eq!(slot, 1);
    assert_eq!(c.state().item_count, 3);

    assert!(c.tick(0));
    assert!(c.tick(50));
    assert_eq!(
        c.list().slot(1),
        Slot::Incoming {
            index: 1,
            progress: 0.5
        }
    );
    // Retiring the insert still asks for a final frame.
    assert!(c.tick(100));
    assert!(!c.is_animating());
    assert!(!c.tick(116));
}

#[test]
fn controller_remove_renders_fading_item_until_done() {
    let mut c: Controller<String> =
        Controller::new(AnimatedListOptions::new(3).with_durations_ms(100, 100), Easing::Linear);
    c.remove_item(0, |p| format!("gone@{p}"));
    assert_eq!(c.state().item_count, 3);

    c.tick(0);
    c.tick(25);
    let rendered = c.list().render_slot(0, |i, _| format!("item{i}"));
    assert_eq!(rendered, "gone@0.75");
    assert_eq!(c.list().render_slot(1, |i, _| format!("item{i}")), "item0");

    assert!(c.tick(100));
    assert_eq!(c.state().item_count, 2);
    assert!(!c.tick(200));
}

#[test]
fn controller_reverses_a_half_inserted_item() {
    let mut c: Controller<String> =
        Controller::new(AnimatedListOptions::new(0).with_durations_ms(100, 100), Easing::Linear);
    c.insert_item(0);
    c.tick(0);
    c.tick(50);
    c.remove_item(0, |_| String::from("x"));
    assert_eq!(c.list().outgoing_len(), 1);
    assert_eq!(c.list().incoming_len(), 0);

    // Half the distance remains, so half the duration.
    c.tick(60);
    c.tick(110);
    assert!(!c.is_animating());
    assert_eq!(c.state().item_count, 0);
}

#[test]
fn controller_keeps_host_on_change() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut c: Controller<()> = Controller::new(
        AnimatedListOptions::new(1).with_on_change(Some({
            let calls = Arc::clone(&calls);
            move |_: ListState| {
                calls.fetch_add(1, Ordering::Relaxed);
            }
        })),
        Easing::Linear,
    );
    c.list_mut().set_item_count(4);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert!(c.take_frame_request());
    assert!(!c.take_frame_request());

    c.request_frame();
    assert!(c.tick(0));
    assert!(!c.tick(16));
}

#[test]
fn zero_duration_settles_on_the_same_tick() {
    let mut c: Controller<()> =
        Controller::new(AnimatedListOptions::new(1).with_durations_ms(0, 0), Easing::Linear);
    c.insert_item(0);
    c.remove_item(1, |_| ());
    assert!(c.tick(0));
    assert!(!c.is_animating());
    assert_eq!(c.state().item_count, 1);
}
