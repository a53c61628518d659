// Host-side tests for the full touch lifecycle against a recording style sink.

use friction_core::*;
use glam::DVec2;

#[derive(Default)]
struct Recorder {
    transitions: Vec<String>,
    transforms: Vec<String>,
    origins: Vec<String>,
}

impl StyleSink for Recorder {
    fn set_transition(&mut self, value: &str) {
        self.transitions.push(value.to_string());
    }
    fn set_transform(&mut self, value: &str) {
        self.transforms.push(value.to_string());
    }
    fn set_transform_origin(&mut self, value: &str) {
        self.origins.push(value.to_string());
    }
}

#[derive(Default)]
struct Events {
    flicked: Vec<bool>,
    completed: usize,
}

impl GestureObserver for Events {
    fn flicked(&mut self, flicked: bool) {
        self.flicked.push(flicked);
    }
    fn complete(&mut self) {
        self.completed += 1;
    }
}

const ZERO_CSS: &str = "rotate(0rad) translate(0px, 0px) translateZ(0)";

fn controller(config: GestureConfig) -> GestureController<Recorder, Events> {
    let metrics = ElementMetrics::new(200.0, 200.0, 0.0, 0.0);
    GestureController::new(config, metrics, Recorder::default(), Events::default()).unwrap()
}

/// Drag from the element centre 50px right over 100ms.
fn fast_drag(c: &mut GestureController<Recorder, Events>) -> PendingFinish {
    c.touch_start(DVec2::new(100.0, 100.0));
    c.touch_move(DVec2::new(100.0, 100.0), 1000.0);
    c.touch_move(DVec2::new(150.0, 100.0), 1100.0);
    c.touch_end().unwrap()
}

#[test]
fn fast_drag_flicks_to_extrapolated_destination() {
    let mut c = controller(GestureConfig::default());
    let pending = fast_drag(&mut c);

    assert_eq!(c.observer().flicked, vec![true]);
    assert_eq!(pending.duration_ms, 500.0);
    let sink = c.sink();
    assert_eq!(sink.transitions.last().unwrap(), "500ms linear");
    assert_eq!(
        sink.transforms.last().unwrap(),
        "rotate(0rad) translate(250px, 0px) translateZ(0)"
    );
    assert_eq!(sink.origins.last().unwrap(), "250px 0px");
    assert!(c.is_transitioning());

    assert!(c.finish_transition(pending));
    assert_eq!(c.sink().transitions.last().unwrap(), "");
    assert_eq!(c.observer().completed, 1);
    assert!(!c.is_transitioning());
}

#[test]
fn move_updates_origin_relative_to_element() {
    let metrics = ElementMetrics::new(100.0, 50.0, 300.0, 400.0);
    let mut c = GestureController::new(
        GestureConfig::default(),
        metrics,
        Recorder::default(),
        Events::default(),
    )
    .unwrap();
    c.touch_start(DVec2::new(350.0, 425.0));
    let frame = c.touch_move(DVec2::new(360.0, 430.0), 0.0).unwrap();
    assert_eq!(frame.origin, DVec2::new(60.0, 30.0));
    assert_eq!(c.sink().origins.last().unwrap(), "60px 30px");
    assert_eq!(
        c.sink().transforms.last().unwrap(),
        "rotate(0rad) translate(10px, 5px) translateZ(0)"
    );
}

#[test]
fn quick_tap_settles_without_flick_notification() {
    let mut c = controller(GestureConfig::default());
    c.touch_start(DVec2::new(120.0, 80.0));
    c.touch_move(DVec2::new(190.0, 80.0), 0.0);
    c.touch_move(DVec2::new(260.0, 80.0), 10.0);
    let pending = c.touch_end().unwrap();

    assert!(c.observer().flicked.is_empty());
    assert_eq!(pending.duration_ms, 200.0);
    assert_eq!(c.sink().transitions.last().unwrap(), "200ms linear");
    assert_eq!(c.sink().transforms.last().unwrap(), ZERO_CSS);
}

#[test]
fn slow_drag_reports_settle() {
    let mut c = controller(GestureConfig::default());
    c.touch_start(DVec2::new(100.0, 100.0));
    c.touch_move(DVec2::new(100.0, 100.0), 0.0);
    c.touch_move(DVec2::new(110.0, 100.0), 100.0);
    let pending = c.touch_end().unwrap();
    assert_eq!(c.observer().flicked, vec![false]);
    assert_eq!(pending.duration_ms, 200.0);
    assert_eq!(c.sink().transforms.last().unwrap(), ZERO_CSS);
}

#[test]
fn reset_position_snaps_to_zero_after_flick() {
    let mut c = controller(GestureConfig {
        reset_position: true,
        ..Default::default()
    });
    let pending = fast_drag(&mut c);
    assert_ne!(c.sink().transforms.last().unwrap(), ZERO_CSS);
    assert!(c.finish_transition(pending));
    assert_eq!(c.sink().transforms.last().unwrap(), ZERO_CSS);
    assert_eq!(c.observer().completed, 1);
}

#[test]
fn without_reset_position_flick_destination_is_kept() {
    let mut c = controller(GestureConfig::default());
    let pending = fast_drag(&mut c);
    let before = c.sink().transforms.len();
    c.finish_transition(pending);
    assert_eq!(c.sink().transforms.len(), before);
}

#[test]
fn new_touch_supersedes_pending_finish() {
    let mut c = controller(GestureConfig {
        reset_position: true,
        ..Default::default()
    });
    let pending = fast_drag(&mut c);
    c.touch_start(DVec2::new(20.0, 20.0));
    let transitions = c.sink().transitions.len();
    let transforms = c.sink().transforms.len();

    assert!(!c.finish_transition(pending));
    assert_eq!(c.sink().transitions.len(), transitions);
    assert_eq!(c.sink().transforms.len(), transforms);
    assert_eq!(c.observer().completed, 0);
    assert!(c.tracker().is_active());
}

#[test]
fn finish_fires_once_per_transition() {
    let mut c = controller(GestureConfig::default());
    let pending = fast_drag(&mut c);
    assert!(c.finish_transition(pending));
    assert!(!c.finish_transition(pending));
    assert_eq!(c.observer().completed, 1);
}

#[test]
fn touch_start_clears_running_transition() {
    let mut c = controller(GestureConfig::default());
    fast_drag(&mut c);
    c.touch_start(DVec2::new(100.0, 100.0));
    assert_eq!(c.sink().transitions.last().unwrap(), "");
}

#[test]
fn events_without_touch_start_are_ignored() {
    let mut c = controller(GestureConfig::default());
    assert!(c.touch_move(DVec2::new(1.0, 1.0), 0.0).is_none());
    assert!(c.touch_end().is_none());
    assert!(c.sink().transforms.is_empty());
    assert!(c.observer().flicked.is_empty());
}

#[test]
fn relayout_changes_flick_threshold_scale() {
    let mut c = controller(GestureConfig::default());
    c.relayout(ElementMetrics::new(400.0, 400.0, 0.0, 0.0));
    c.touch_start(DVec2::new(200.0, 200.0));
    c.touch_move(DVec2::new(200.0, 200.0), 0.0);
    c.touch_move(DVec2::new(250.0, 200.0), 100.0);
    c.touch_end();
    // 250 / 400 is below the default threshold.
    assert_eq!(c.observer().flicked, vec![false]);
}

#[test]
fn unit_observer_accepts_notifications() {
    let metrics = ElementMetrics::new(200.0, 200.0, 0.0, 0.0);
    let mut c =
        GestureController::new(GestureConfig::default(), metrics, Recorder::default(), ()).unwrap();
    c.touch_start(DVec2::new(100.0, 100.0));
    c.touch_move(DVec2::new(100.0, 100.0), 0.0);
    c.touch_move(DVec2::new(200.0, 100.0), 50.0);
    let pending = c.touch_end().unwrap();
    assert!(c.finish_transition(pending));
}

#[test]
fn center_line_touch_keeps_every_style_string_finite() {
    let mut c = controller(GestureConfig {
        reset_position: true,
        ..Default::default()
    });
    // Offset (50, 0) from the centre: the arctan sees a division by zero.
    c.touch_start(DVec2::new(150.0, 100.0));
    c.touch_move(DVec2::new(150.0, 100.0), 0.0);
    c.touch_move(DVec2::new(250.0, 130.0), 100.0);
    let pending = c.touch_end().unwrap();
    assert!(c.finish_transition(pending));

    assert_eq!(c.observer().flicked, vec![true]);
    let sink = c.sink();
    assert_eq!(
        sink.transforms[1],
        "rotate(0rad) translate(100px, 30px) translateZ(0)"
    );
    assert_eq!(sink.origins.last().unwrap(), "500px 150px");
    for s in sink
        .transitions
        .iter()
        .chain(&sink.transforms)
        .chain(&sink.origins)
    {
        assert!(!s.contains("NaN") && !s.contains("inf"), "{s}");
    }
    assert_eq!(sink.transforms.last().unwrap(), ZERO_CSS);
}

#[test]
fn notification_queue_defers_in_order() {
    let metrics = ElementMetrics::new(200.0, 200.0, 0.0, 0.0);
    let mut c = GestureController::new(
        GestureConfig::default(),
        metrics,
        Recorder::default(),
        NotificationQueue::default(),
    )
    .unwrap();
    c.touch_start(DVec2::new(100.0, 100.0));
    c.touch_move(DVec2::new(100.0, 100.0), 0.0);
    c.touch_move(DVec2::new(200.0, 100.0), 50.0);
    let pending = c.touch_end().unwrap();
    assert_eq!(c.observer_mut().drain(), vec![Notification::Flicked(true)]);
    assert!(c.observer().is_empty());

    c.finish_transition(pending);
    assert_eq!(c.observer_mut().drain(), vec![Notification::Complete]);

    // A stale finish queues nothing.
    c.finish_transition(pending);
    assert!(c.observer().is_empty());
}
