//! Rendering of the visual transform applied to the bound element.
//!
//! These helpers are pure: the tracker calls them for every live move and the
//! controller calls them again for the final release animation.

use glam::DVec2;
use std::fmt;

/// Rotation plus translation applied to the element at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub dx: f64,
    pub dy: f64,
    /// Radians.
    pub rotate: f64,
}

impl Transform {
    pub const ZERO: Transform = Transform {
        dx: 0.0,
        dy: 0.0,
        rotate: 0.0,
    };

    pub fn new(dx: f64, dy: f64, rotate: f64) -> Self {
        Self { dx, dy, rotate }
    }

    #[inline]
    pub fn translation(&self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }

    /// `rotate(..rad) translate(..px, ..px) translateZ(0)`. The trailing
    /// `translateZ(0)` promotes the element to its own compositing layer.
    pub fn css_transform(&self) -> String {
        format!(
            "rotate({}rad) translate({}px, {}px) translateZ(0)",
            CssNumber(self.rotate),
            CssNumber(self.dx),
            CssNumber(self.dy)
        )
    }
}

/// Transform origin string `<x>px <y>px`.
pub fn css_origin(origin: DVec2) -> String {
    format!("{}px {}px", CssNumber(origin.x), CssNumber(origin.y))
}

/// Linear transition string for `duration_ms`.
pub fn transition_css(duration_ms: f64) -> String {
    format!("{}ms linear", CssNumber(duration_ms))
}

/// Number formatting that never emits `-0`, `NaN` or `inf` into a style value.
#[derive(Clone, Copy, Debug)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 || !v.is_finite() {
            f.write_str("0")
        } else {
            write!(f, "{}", v)
        }
    }
}
