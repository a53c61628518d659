//! Flick-or-settle classification at touch end.

use crate::config::GestureConfig;
use crate::geometry::ElementMetrics;
use crate::tracker::SampleCache;
use crate::transform::Transform;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// `None` when too few samples were captured to classify the gesture.
    pub flicked: Option<bool>,
    pub destination: Transform,
    pub duration_ms: f64,
}

impl Release {
    fn settle(config: &GestureConfig, flicked: Option<bool>) -> Self {
        Self {
            flicked,
            destination: Transform::ZERO,
            duration_ms: config.return_duration_ms,
        }
    }
}

/// Zero for NaN and for zero itself.
#[inline]
fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Velocity-extrapolated destination: where the element would be after
/// `flick_duration_ms` at the velocity between the two cached samples.
pub fn flick_destination(cache: &SampleCache, flick_duration_ms: f64) -> Option<Transform> {
    let (old, new) = cache.pair()?;
    let mut elapsed = new.time_ms - old.time_ms;
    if elapsed == 0.0 {
        elapsed = f64::INFINITY;
    }
    let project = |from: f64, to: f64| or_zero(flick_duration_ms * or_zero(to - from) / elapsed);
    Some(Transform::new(
        project(old.transform.dx, new.transform.dx),
        project(old.transform.dy, new.transform.dy),
        project(old.transform.rotate, new.transform.rotate),
    ))
}

pub fn plan_release(
    cache: &SampleCache,
    metrics: &ElementMetrics,
    config: &GestureConfig,
) -> Release {
    let Some(destination) = flick_destination(cache, config.flick_duration_ms) else {
        return Release::settle(config, None);
    };

    let flicked = (destination.dx / metrics.size.x).abs() > config.flick_threshold
        || (destination.dy / metrics.size.y).abs() > config.flick_threshold;
    log::debug!("[release] destination={:?} flicked={}", destination, flicked);

    if flicked {
        Release {
            flicked: Some(true),
            destination,
            duration_ms: config.flick_duration_ms,
        }
    } else {
        Release::settle(config, Some(false))
    }
}
