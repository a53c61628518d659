use crate::constants::{EVENT_RESIZE, EVENT_TOUCH_END, EVENT_TOUCH_MOVE, EVENT_TOUCH_START};
use crate::dom::{self, ElementStyle};
use crate::options::HostCallbacks;
use friction_core::{GestureController, NotificationQueue, PendingFinish};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<GestureController<ElementStyle, NotificationQueue>>>;

type TouchClosure = Closure<dyn FnMut(web::TouchEvent)>;

/// Controller plus the page callbacks its queued notifications go to.
#[derive(Clone)]
pub struct Binding {
    pub controller: SharedController,
    pub callbacks: Rc<HostCallbacks>,
}

impl Binding {
    /// Run `f` against the controller, then deliver whatever it queued with
    /// the borrow already released.
    fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut GestureController<ElementStyle, NotificationQueue>) -> R,
    ) -> R {
        let (result, notifications) = {
            let mut controller = self.controller.borrow_mut();
            let result = f(&mut controller);
            (result, controller.observer_mut().drain())
        };
        self.callbacks.deliver(notifications);
        result
    }
}

/// Event subscriptions held for one bound element. Dropping the set removes
/// every subscription before the closures are released.
pub struct Listeners {
    element: web::HtmlElement,
    window: web::Window,
    touch_start: TouchClosure,
    touch_move: TouchClosure,
    touch_end: TouchClosure,
    resize: Closure<dyn FnMut()>,
}

impl Listeners {
    pub fn attach(
        element: &web::HtmlElement,
        window: &web::Window,
        binding: Binding,
    ) -> anyhow::Result<Self> {
        let listeners = Self {
            element: element.clone(),
            window: window.clone(),
            touch_start: wire_touch_start(binding.clone()),
            touch_move: wire_touch_move(binding.clone()),
            touch_end: wire_touch_end(window, binding.clone()),
            resize: wire_resize(element, binding),
        };
        // On failure `listeners` drops here and detaches whatever was added.
        listeners.register()?;
        Ok(listeners)
    }

    fn register(&self) -> anyhow::Result<()> {
        for (name, closure) in self.touch_closures() {
            self.element
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", name, e))?;
        }
        self.window
            .add_event_listener_with_callback(EVENT_RESIZE, self.resize.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", EVENT_RESIZE, e))?;
        Ok(())
    }

    fn touch_closures(&self) -> [(&'static str, &TouchClosure); 3] {
        [
            (EVENT_TOUCH_START, &self.touch_start),
            (EVENT_TOUCH_MOVE, &self.touch_move),
            (EVENT_TOUCH_END, &self.touch_end),
        ]
    }

    fn detach(&self) {
        for (name, closure) in self.touch_closures() {
            _ = self
                .element
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        _ = self
            .window
            .remove_event_listener_with_callback(EVENT_RESIZE, self.resize.as_ref().unchecked_ref());
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach();
    }
}

fn wire_touch_start(binding: Binding) -> TouchClosure {
    Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(point) = dom::primary_touch_page(&ev) {
            binding.with_controller(|c| c.touch_start(point));
        }
    }) as Box<dyn FnMut(_)>)
}

fn wire_touch_move(binding: Binding) -> TouchClosure {
    Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(point) = dom::primary_touch_page(&ev) {
            binding.with_controller(|c| c.touch_move(point, instant::now()));
        }
    }) as Box<dyn FnMut(_)>)
}

fn wire_touch_end(window: &web::Window, binding: Binding) -> TouchClosure {
    let window = window.clone();
    Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(pending) = binding.with_controller(|c| c.touch_end()) {
            schedule_finish(&window, binding.clone(), pending);
        }
    }) as Box<dyn FnMut(_)>)
}

fn wire_resize(element: &web::HtmlElement, binding: Binding) -> Closure<dyn FnMut()> {
    let element = element.clone();
    Closure::wrap(Box::new(move || {
        let metrics = dom::element_metrics(&element);
        binding.with_controller(|c| c.relayout(metrics));
    }) as Box<dyn FnMut()>)
}

/// One-shot timer handing the token back once the transition has run. It is
/// not cancelled on unbind; stale tokens are ignored by the controller.
fn schedule_finish(window: &web::Window, binding: Binding, pending: PendingFinish) {
    let callback = Closure::once_into_js(move || {
        binding.with_controller(|c| c.finish_transition(pending));
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        pending.duration_ms.round() as i32,
    ) {
        log::warn!("[events] failed to schedule finish: {:?}", e);
    }
}
