use crate::constants::{TRANSFORM_ORIGIN_PROPERTIES, TRANSFORM_PROPERTIES, TRANSITION_PROPERTIES};
use friction_core::{ElementMetrics, StyleSink};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Box size plus cumulative document offset, summed up the `offsetParent` chain.
pub fn element_metrics(element: &web::HtmlElement) -> ElementMetrics {
    let mut left = 0.0;
    let mut top = 0.0;
    let mut current = Some(element.clone());
    while let Some(el) = current {
        left += el.offset_left() as f64;
        top += el.offset_top() as f64;
        current = el
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<web::HtmlElement>().ok());
    }
    ElementMetrics::new(
        element.offset_width() as f64,
        element.offset_height() as f64,
        left,
        top,
    )
}

/// Inline style of the bound element.
pub struct ElementStyle {
    style: web::CssStyleDeclaration,
}

impl ElementStyle {
    pub fn new(element: &web::HtmlElement) -> Self {
        Self {
            style: element.style(),
        }
    }

    fn write(&self, properties: &[&str], value: &str) {
        for property in properties {
            if let Err(e) = self.style.set_property(property, value) {
                log::warn!("[dom] failed to set {}: {:?}", property, e);
            }
        }
    }
}

impl StyleSink for ElementStyle {
    fn set_transition(&mut self, value: &str) {
        self.write(TRANSITION_PROPERTIES, value);
    }

    fn set_transform(&mut self, value: &str) {
        self.write(TRANSFORM_PROPERTIES, value);
    }

    fn set_transform_origin(&mut self, value: &str) {
        self.write(TRANSFORM_ORIGIN_PROPERTIES, value);
    }
}

/// Page coordinates of the primary contact. `touchend` carries no
/// `targetTouches`, so the changed list is consulted as a fallback.
#[inline]
pub fn primary_touch_page(ev: &web::TouchEvent) -> Option<glam::DVec2> {
    let touch = ev
        .target_touches()
        .get(0)
        .or_else(|| ev.changed_touches().get(0))?;
    Some(glam::DVec2::new(touch.page_x() as f64, touch.page_y() as f64))
}
