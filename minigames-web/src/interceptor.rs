//! One-shot, capture-phase click interceptor on `window`.
//!
//! A down-trigger tap fires on pointerdown, but the browser still dispatches a
//! click after pointerup. Arming the interceptor cancels exactly that next
//! click before any element sees it. The listener removes itself when it
//! fires, and is removed on [`ClickInterceptor::disarm`] or drop.
#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, OnceCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, Window};

#[cfg(target_arch = "wasm32")]
struct Registration {
    window: Window,
    handler: Closure<dyn FnMut(Event)>,
    fired: Rc<Cell<bool>>,
}

#[cfg(target_arch = "wasm32")]
impl Registration {
    fn remove(&self) {
        if self.fired.get() {
            return;
        }
        let _ = self.window.remove_event_listener_with_callback_and_bool(
            "click",
            self.handler.as_ref().unchecked_ref(),
            true,
        );
    }
}

#[derive(Default)]
pub struct ClickInterceptor {
    #[cfg(target_arch = "wasm32")]
    registration: Option<Registration>,
    #[cfg(not(target_arch = "wasm32"))]
    pending: Option<Box<dyn FnOnce()>>,
}

#[cfg(target_arch = "wasm32")]
impl ClickInterceptor {
    /// Cancel the next click anywhere in the window, then run `on_consumed`.
    /// Replaces any registration still pending.
    pub fn arm<F>(&mut self, on_consumed: F)
    where
        F: FnOnce() + 'static,
    {
        self.disarm();
        let Some(window) = crate::dom::window() else {
            log::warn!("no window; click interceptor not armed");
            return;
        };

        let fired = Rc::new(Cell::new(false));
        let own_fn: Rc<OnceCell<js_sys::Function>> = Rc::new(OnceCell::new());
        let mut on_consumed = Some(on_consumed);
        let handler = {
            let window = window.clone();
            let fired = Rc::clone(&fired);
            let own_fn = Rc::clone(&own_fn);
            Closure::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                event.stop_propagation();
                if let Some(function) = own_fn.get() {
                    let _ =
                        window.remove_event_listener_with_callback_and_bool("click", function, true);
                }
                fired.set(true);
                if let Some(callback) = on_consumed.take() {
                    callback();
                }
            }) as Box<dyn FnMut(Event)>)
        };

        let function: &js_sys::Function = handler.as_ref().unchecked_ref();
        let _ = own_fn.set(function.clone());
        if let Err(err) = window.add_event_listener_with_callback_and_bool("click", function, true)
        {
            log::warn!("failed to arm click interceptor: {err:?}");
            return;
        }
        self.registration = Some(Registration {
            window,
            handler,
            fired,
        });
    }

    /// Drop a pending registration without waiting for a click.
    pub fn disarm(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.remove();
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(|registration| !registration.fired.get())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClickInterceptor {
    pub fn arm<F>(&mut self, on_consumed: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Box::new(on_consumed));
    }

    pub fn disarm(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Stand-in for the window delivering a click outside a browser.
    /// Returns whether a pending registration consumed it.
    pub fn intercept(&mut self) -> bool {
        self.pending.take().is_some_and(|on_consumed| {
            on_consumed();
            true
        })
    }
}

impl Drop for ClickInterceptor {
    fn drop(&mut self) {
        self.disarm();
    }
}
