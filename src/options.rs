//! Reading the host's options object.

use friction_core::{
    ConfigError, GestureOptions, Notification, OPT_COMPLETE, OPT_FLICKED, OPT_FLICK_DURATION,
    OPT_FLICK_THRESHOLD, OPT_FRICTION, OPT_MAX_ROTATION, OPT_RESET_POSITION, OPT_RETURN_DURATION,
};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Options object split into numeric settings and callbacks.
pub struct HostOptions {
    pub gesture: GestureOptions,
    pub callbacks: HostCallbacks,
}

pub fn read_options(options: &JsValue) -> Result<HostOptions, ConfigError> {
    if options.is_undefined() || options.is_null() {
        return Ok(HostOptions {
            gesture: GestureOptions::default(),
            callbacks: HostCallbacks::default(),
        });
    }
    let gesture = GestureOptions {
        flick_duration_ms: number(options, OPT_FLICK_DURATION)?,
        flick_threshold: number(options, OPT_FLICK_THRESHOLD)?,
        friction: number(options, OPT_FRICTION)?,
        max_rotation: number(options, OPT_MAX_ROTATION)?,
        return_duration_ms: number(options, OPT_RETURN_DURATION)?,
        reset_position: field(options, OPT_RESET_POSITION).map(|v| v.is_truthy()),
    };
    let callbacks = HostCallbacks {
        flicked: callback(options, OPT_FLICKED)?,
        complete: callback(options, OPT_COMPLETE)?,
    };
    Ok(HostOptions { gesture, callbacks })
}

fn field(options: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn number(options: &JsValue, key: &'static str) -> Result<Option<f64>, ConfigError> {
    match field(options, key) {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or(ConfigError::InvalidType { option: key }),
    }
}

fn callback(options: &JsValue, key: &'static str) -> Result<Option<Function>, ConfigError> {
    match field(options, key) {
        None => Ok(None),
        Some(v) => v
            .dyn_into::<Function>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidType { option: key }),
    }
}

/// The page's `flicked` / `complete` callbacks. Invoked only after the
/// controller borrow is released, so a callback may dispatch touch events.
#[derive(Clone, Default)]
pub struct HostCallbacks {
    flicked: Option<Function>,
    complete: Option<Function>,
}

impl HostCallbacks {
    pub fn deliver(&self, notifications: Vec<Notification>) {
        for notification in notifications {
            let result = match notification {
                Notification::Flicked(flicked) => self
                    .flicked
                    .as_ref()
                    .map(|f| f.call1(&JsValue::NULL, &JsValue::from_bool(flicked))),
                Notification::Complete => self.complete.as_ref().map(|f| f.call0(&JsValue::NULL)),
            };
            if let Some(Err(e)) = result {
                log::warn!("[options] {:?} callback threw: {:?}", notification, e);
            }
        }
    }
}
