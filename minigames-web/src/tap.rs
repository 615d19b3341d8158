//! Yew binding for the tap engine.
//!
//! [`use_tap`] turns an element's pointer, click and key events into a single
//! `on_tap` emission. The engine lives for the component's lifetime; the token
//! passed on each render is what a release is checked against.
use minigames_core::{
    ClickOutcome, PointerKind, PointerSample, PressOutcome, SameValue, TapEngine, TapOptions,
    TokenProvider,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{KeyboardEvent, MouseEvent, PointerEvent};
use yew::prelude::*;

use crate::interceptor::ClickInterceptor;

/// Token provider reading whatever the latest render stored.
#[derive(Debug)]
pub struct TokenSlot<T> {
    current: RefCell<T>,
}

impl<T> TokenSlot<T> {
    pub const fn new(token: T) -> Self {
        Self {
            current: RefCell::new(token),
        }
    }

    pub fn set(&self, token: T) {
        *self.current.borrow_mut() = token;
    }
}

impl<T: SameValue + Clone> TokenProvider for TokenSlot<T> {
    type Token = T;

    fn token(&self) -> T {
        self.current.borrow().clone()
    }
}

/// Engine plus interceptor for one element, shared by its event callbacks.
pub struct TapDriver<T: SameValue + Clone + 'static> {
    engine: Rc<RefCell<TapEngine<TokenSlot<T>>>>,
    interceptor: Rc<RefCell<ClickInterceptor>>,
}

impl<T: SameValue + Clone + 'static> Clone for TapDriver<T> {
    fn clone(&self) -> Self {
        Self {
            engine: Rc::clone(&self.engine),
            interceptor: Rc::clone(&self.interceptor),
        }
    }
}

impl<T: SameValue + Clone + 'static> TapDriver<T> {
    pub fn new(options: TapOptions, token: T) -> Self {
        Self {
            engine: Rc::new(RefCell::new(TapEngine::with_provider(
                options,
                TokenSlot::new(token),
            ))),
            interceptor: Rc::new(RefCell::new(ClickInterceptor::default())),
        }
    }

    pub fn set_token(&self, token: T) {
        self.engine.borrow().provider().set(token);
    }

    pub fn press(&self, sample: PointerSample, on_tap: &Callback<()>) {
        let outcome = self.engine.borrow_mut().pointer_down(sample);
        if let PressOutcome::Activated { arm_interceptor } = outcome {
            if arm_interceptor {
                let engine = Rc::clone(&self.engine);
                self.interceptor
                    .borrow_mut()
                    .arm(move || engine.borrow_mut().intercepted_click());
            }
            on_tap.emit(());
        }
    }

    pub fn release(&self, sample: PointerSample, on_tap: &Callback<()>) {
        let outcome = self.engine.borrow_mut().pointer_up(sample);
        if outcome.fires() {
            on_tap.emit(());
        }
    }

    pub fn cancel(&self) {
        self.engine.borrow_mut().pointer_cancel();
    }

    pub fn leave(&self) {
        self.engine.borrow_mut().pointer_leave();
    }

    /// Handle a click that reached the element. Returns whether the host must
    /// prevent its default action.
    pub fn click(&self, on_tap: &Callback<()>) -> bool {
        let outcome = self.engine.borrow_mut().click();
        match outcome {
            ClickOutcome::Swallowed { disarm } => {
                if disarm {
                    self.interceptor.borrow_mut().disarm();
                }
                false
            }
            ClickOutcome::Suppressed => true,
            ClickOutcome::Activate => {
                on_tap.emit(());
                false
            }
        }
    }

    /// Handle a key press. Returns whether the host must prevent its default action.
    pub fn key(&self, key: &str, on_tap: &Callback<()>) -> bool {
        let activates = self.engine.borrow().key_down(key);
        if activates {
            on_tap.emit(());
        }
        activates
    }

    #[must_use]
    pub fn interceptor_armed(&self) -> bool {
        self.interceptor.borrow().is_armed()
    }

    /// Simulate the window receiving a click while outside a browser.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn window_click(&self) -> bool {
        self.interceptor.borrow_mut().intercept()
    }
}

/// Pointer event reduced to what the engine reads.
#[must_use]
pub fn pointer_sample(event: &PointerEvent) -> PointerSample {
    PointerSample {
        kind: PointerKind::from_pointer_type(&event.pointer_type()),
        button: event.button(),
        x: f64::from(event.client_x()),
        y: f64::from(event.client_y()),
    }
}

/// Event callbacks to spread onto the tapped element.
#[derive(Clone, PartialEq)]
pub struct TapHandlers {
    pub onpointerdown: Callback<PointerEvent>,
    pub onpointerup: Callback<PointerEvent>,
    pub onpointercancel: Callback<PointerEvent>,
    pub onpointerleave: Callback<PointerEvent>,
    pub onclick: Callback<MouseEvent>,
    pub onkeydown: Callback<KeyboardEvent>,
}

#[hook]
pub fn use_tap<T>(on_tap: Callback<()>, options: TapOptions, token: T) -> TapHandlers
where
    T: SameValue + Clone + 'static,
{
    let driver = {
        let token = token.clone();
        use_memo((), move |_| TapDriver::new(options, token))
    };
    driver.set_token(token);

    let onpointerdown = {
        let driver = (*driver).clone();
        let on_tap = on_tap.clone();
        Callback::from(move |e: PointerEvent| driver.press(pointer_sample(&e), &on_tap))
    };
    let onpointerup = {
        let driver = (*driver).clone();
        let on_tap = on_tap.clone();
        Callback::from(move |e: PointerEvent| driver.release(pointer_sample(&e), &on_tap))
    };
    let onpointercancel = {
        let driver = (*driver).clone();
        Callback::from(move |_e: PointerEvent| driver.cancel())
    };
    let onpointerleave = {
        let driver = (*driver).clone();
        Callback::from(move |_e: PointerEvent| driver.leave())
    };
    let onclick = {
        let driver = (*driver).clone();
        let on_tap = on_tap.clone();
        Callback::from(move |e: MouseEvent| {
            if driver.click(&on_tap) {
                e.prevent_default();
            }
        })
    };
    let onkeydown = {
        let driver = (*driver).clone();
        Callback::from(move |e: KeyboardEvent| {
            if driver.key(&e.key(), &on_tap) {
                e.prevent_default();
            }
        })
    };

    TapHandlers {
        onpointerdown,
        onpointerup,
        onpointercancel,
        onpointerleave,
        onclick,
        onkeydown,
    }
}
