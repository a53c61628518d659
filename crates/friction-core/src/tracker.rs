//! Per-gesture state: touch-down weighting and the throttled sample cache.

use crate::config::GestureConfig;
use crate::constants::SAMPLE_REFRESH_MS;
use crate::geometry::{clamp_abs, sign, ElementMetrics};
use crate::transform::Transform;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Geometry captured at touch-down. Fixed for the lifetime of one gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub anchor: DVec2,
    /// Per-axis rotation weighting, radians.
    pub angle: DVec2,
    pub rotation_scale: DVec2,
}

impl GestureState {
    pub fn begin(anchor: DVec2, metrics: &ElementMetrics, friction: f64) -> Self {
        let offset = anchor - metrics.center();

        // offset.y == 0 keeps IEEE division: atan(±inf) == ±pi/2.
        let mut ratio_arctan = (offset.x / offset.y).atan();
        if ratio_arctan.is_nan() {
            // 0/0: touch-down exactly on the centre carries no rotation.
            ratio_arctan = 0.0;
        }

        let angle = DVec2::new(
            sign(offset.x) * ratio_arctan - sign(offset.y) * FRAC_PI_2,
            sign(offset.y) * ratio_arctan,
        );
        let area = metrics.area();
        let rotation_scale = DVec2::new(
            friction * offset.y.abs() / area,
            friction * offset.x.abs() / area,
        );

        Self {
            anchor,
            angle,
            rotation_scale,
        }
    }

    /// Transform for the finger currently at `point`.
    pub fn transform_at(&self, point: DVec2, max_rotation: f64) -> Transform {
        let delta = point - self.anchor;
        let rotate = self.angle.x * clamp_abs(delta.x * self.rotation_scale.x, max_rotation)
            + self.angle.y * clamp_abs(delta.y * self.rotation_scale.y, max_rotation);
        Transform::new(delta.x, delta.y, rotate)
    }
}

/// Motion snapshot used for release velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time_ms: f64,
    pub transform: Transform,
}

/// The two most recent throttled samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleCache {
    pub old: Option<Sample>,
    pub new: Option<Sample>,
}

impl SampleCache {
    /// Store `sample` if the cache is empty or the newest entry is older than
    /// [`SAMPLE_REFRESH_MS`]. Returns whether the cache shifted.
    pub fn record(&mut self, sample: Sample) -> bool {
        let stale = match self.new {
            None => true,
            Some(newest) => sample.time_ms - newest.time_ms > SAMPLE_REFRESH_MS,
        };
        if stale {
            self.old = self.new.replace(sample);
            log::trace!("[tracker] sample t={} {:?}", sample.time_ms, sample.transform);
        }
        stale
    }

    /// Both samples, once two have been captured.
    pub fn pair(&self) -> Option<(Sample, Sample)> {
        Some((self.old?, self.new?))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Output of one move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveFrame {
    pub transform: Transform,
    /// Touch point relative to the element, used as transform origin.
    pub origin: DVec2,
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    state: Option<GestureState>,
    cache: SampleCache,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, anchor: DVec2, metrics: &ElementMetrics, config: &GestureConfig) {
        self.state = Some(GestureState::begin(anchor, metrics, config.friction));
        self.cache.clear();
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    pub fn cache(&self) -> &SampleCache {
        &self.cache
    }

    /// Compute the live transform and refresh the sample cache. `None` when no
    /// gesture is in progress.
    pub fn advance(
        &mut self,
        point: DVec2,
        now_ms: f64,
        metrics: &ElementMetrics,
        config: &GestureConfig,
    ) -> Option<MoveFrame> {
        let state = self.state.as_ref()?;
        let transform = state.transform_at(point, config.max_rotation);
        self.cache.record(Sample {
            time_ms: now_ms,
            transform,
        });
        Some(MoveFrame {
            transform,
            origin: metrics.relative(point),
        })
    }

    /// Finish the gesture, handing back its samples.
    pub fn end(&mut self) -> Option<SampleCache> {
        self.state.take()?;
        Some(std::mem::take(&mut self.cache))
    }
}
