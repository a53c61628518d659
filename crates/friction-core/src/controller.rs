//! Drives the tracker and release planner against a host element.
//!
//! The controller never touches the platform directly. Style writes go through
//! [`StyleSink`], notifications through [`GestureObserver`], and the single
//! delayed callback is returned to the host as a [`PendingFinish`] token that
//! must be handed back to [`GestureController::finish_transition`] once its
//! duration has elapsed.

use crate::config::{ConfigError, GestureConfig};
use crate::geometry::ElementMetrics;
use crate::release::plan_release;
use crate::tracker::{GestureTracker, MoveFrame};
use crate::transform::{css_origin, transition_css, Transform};
use glam::DVec2;

/// Inline style properties the controller writes.
pub trait StyleSink {
    fn set_transition(&mut self, value: &str);
    fn set_transform(&mut self, value: &str);
    fn set_transform_origin(&mut self, value: &str);
}

/// Optional host notifications. Both default to no-ops.
pub trait GestureObserver {
    fn flicked(&mut self, _flicked: bool) {}
    fn complete(&mut self) {}
}

impl GestureObserver for () {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notification {
    Flicked(bool),
    Complete,
}

/// Observer that records notifications so the host can deliver them once it
/// no longer holds the controller.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    queued: Vec<Notification>,
}

impl NotificationQueue {
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queued)
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

impl GestureObserver for NotificationQueue {
    fn flicked(&mut self, flicked: bool) {
        self.queued.push(Notification::Flicked(flicked));
    }

    fn complete(&mut self) {
        self.queued.push(Notification::Complete);
    }
}

/// A transition awaiting its finish callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingFinish {
    generation: u64,
    pub duration_ms: f64,
}

pub struct GestureController<S: StyleSink, O: GestureObserver> {
    config: GestureConfig,
    metrics: ElementMetrics,
    tracker: GestureTracker,
    sink: S,
    observer: O,
    // Bumped on every touch start; finish tokens from older generations are stale.
    generation: u64,
    in_flight: Option<u64>,
}

impl<S: StyleSink, O: GestureObserver> GestureController<S, O> {
    pub fn new(
        config: GestureConfig,
        metrics: ElementMetrics,
        sink: S,
        observer: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            metrics,
            tracker: GestureTracker::new(),
            sink,
            observer,
            generation: 0,
            in_flight: None,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn metrics(&self) -> &ElementMetrics {
        &self.metrics
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn relayout(&mut self, metrics: ElementMetrics) {
        self.metrics = metrics;
    }

    pub fn touch_start(&mut self, point: DVec2) {
        // Clearing the transition snaps any running animation to its current state.
        self.sink.set_transition("");
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = None;
        self.tracker.begin(point, &self.metrics, &self.config);
    }

    pub fn touch_move(&mut self, point: DVec2, now_ms: f64) -> Option<MoveFrame> {
        let frame = self
            .tracker
            .advance(point, now_ms, &self.metrics, &self.config)?;
        self.sink.set_transform_origin(&css_origin(frame.origin));
        self.sink.set_transform(&frame.transform.css_transform());
        Some(frame)
    }

    /// Classify the gesture and start its final transition. `None` when no
    /// gesture was in progress.
    pub fn touch_end(&mut self) -> Option<PendingFinish> {
        let cache = self.tracker.end()?;
        let release = plan_release(&cache, &self.metrics, &self.config);
        if let Some(flicked) = release.flicked {
            self.observer.flicked(flicked);
        }
        Some(self.begin_transition(release.destination, release.duration_ms))
    }

    fn begin_transition(&mut self, destination: Transform, duration_ms: f64) -> PendingFinish {
        self.sink.set_transition(&transition_css(duration_ms));
        // No touch point exists after release; the destination translation doubles as origin.
        self.sink
            .set_transform_origin(&css_origin(destination.translation()));
        self.sink.set_transform(&destination.css_transform());
        self.in_flight = Some(self.generation);
        PendingFinish {
            generation: self.generation,
            duration_ms,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Finalize a transition. Returns `false` for a stale token (superseded by
    /// a newer touch start, or already finished), in which case nothing is
    /// changed or notified.
    pub fn finish_transition(&mut self, pending: PendingFinish) -> bool {
        if self.in_flight != Some(pending.generation) {
            log::debug!(
                "[controller] dropping stale finish (gen {} != {})",
                pending.generation,
                self.generation
            );
            return false;
        }
        self.in_flight = None;
        self.sink.set_transition("");
        if self.config.reset_position {
            self.sink.set_transform(&Transform::ZERO.css_transform());
        }
        self.observer.complete();
        true
    }
}
