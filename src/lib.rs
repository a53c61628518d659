#![cfg(target_arch = "wasm32")]
use friction_core::{ConfigError, GestureController, NotificationQueue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod options;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("friction-touch loaded");
    Ok(())
}

/// Handle for one bound element.
#[wasm_bindgen]
pub struct FrictionTouch {
    listeners: RefCell<Option<events::Listeners>>,
}

#[wasm_bindgen]
impl FrictionTouch {
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<web::HtmlElement>, options: JsValue) -> Result<FrictionTouch, JsValue> {
        bind(element, &options).map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Remove every event subscription. Safe to call more than once; pending
    /// finish timers still fire. Freeing the handle unbinds as well.
    pub fn unbind(&self) {
        let listeners = self.listeners.borrow_mut().take();
        if listeners.is_some() {
            drop(listeners);
            log::info!("[friction] unbound");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn bound(&self) -> bool {
        self.listeners.borrow().is_some()
    }
}

/// Attach gesture handling to `element`.
#[wasm_bindgen]
pub fn init(element: Option<web::HtmlElement>, options: JsValue) -> Result<FrictionTouch, JsValue> {
    FrictionTouch::new(element, options)
}

fn bind(element: Option<web::HtmlElement>, options: &JsValue) -> anyhow::Result<FrictionTouch> {
    let element = element.ok_or(ConfigError::MissingElement)?;
    let host = options::read_options(options)?;
    let config = host.gesture.resolve()?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let metrics = dom::element_metrics(&element);
    log::info!(
        "[friction] bind {}x{} at ({}, {}) {:?}",
        metrics.size.x,
        metrics.size.y,
        metrics.position.x,
        metrics.position.y,
        config
    );
    let controller = Rc::new(RefCell::new(GestureController::new(
        config,
        metrics,
        dom::ElementStyle::new(&element),
        NotificationQueue::default(),
    )?));
    let binding = events::Binding {
        controller,
        callbacks: Rc::new(host.callbacks),
    };
    let listeners = events::Listeners::attach(&element, &window, binding)?;

    Ok(FrictionTouch {
        listeners: RefCell::new(Some(listeners)),
    })
}
