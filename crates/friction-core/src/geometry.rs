use glam::DVec2;

/// Rendered box of the bound element in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementMetrics {
    pub size: DVec2,
    /// Cumulative offset from the document origin.
    pub position: DVec2,
}

impl ElementMetrics {
    pub fn new(width: f64, height: f64, left: f64, top: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            position: DVec2::new(left, top),
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.position + self.size / 2.0
    }

    /// Page point expressed relative to the element's top-left corner.
    #[inline]
    pub fn relative(&self, page: DVec2) -> DVec2 {
        page - self.position
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.size.x * self.size.y
    }
}

/// Sign with `sign(0) == 0`; `f64::signum` maps zero to one.
#[inline]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        value
    }
}

/// Bound `value` to `[-max, max]`. NaN passes through; `max` must be a
/// non-negative number, which config validation guarantees.
#[inline]
pub fn clamp_abs(value: f64, max: f64) -> f64 {
    value.clamp(-max, max)
}
