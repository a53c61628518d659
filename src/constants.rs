// DOM event names and inline style properties touched by the glue layer.

// Element events
pub const EVENT_TOUCH_START: &str = "touchstart";
pub const EVENT_TOUCH_MOVE: &str = "touchmove";
pub const EVENT_TOUCH_END: &str = "touchend";

// Window events
pub const EVENT_RESIZE: &str = "resize";

// Each style value is written to the standard property and its vendor-prefixed forms.
pub const TRANSITION_PROPERTIES: &[&str] = &["transition"];
pub const TRANSFORM_PROPERTIES: &[&str] = &["-webkit-transform", "-ms-transform", "transform"];
pub const TRANSFORM_ORIGIN_PROPERTIES: &[&str] = &[
    "-webkit-transform-origin",
    "-ms-transform-origin",
    "transform-origin",
];
