use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{MouseEvent, MouseEventInit};

use minigames_web::dom;
use minigames_web::interceptor::ClickInterceptor;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn click_body() -> bool {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("document body");
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click event");
    body.dispatch_event(event.unchecked_ref()).expect("dispatch")
}

#[wasm_bindgen_test]
fn armed_interceptor_cancels_one_click() {
    let hits = Rc::new(Cell::new(0));
    let mut interceptor = ClickInterceptor::default();
    let counter = Rc::clone(&hits);
    interceptor.arm(move || counter.set(counter.get() + 1));
    assert!(interceptor.is_armed());

    assert!(!click_body(), "first click is cancelled");
    assert_eq!(hits.get(), 1);
    assert!(!interceptor.is_armed());

    assert!(click_body(), "second click passes through");
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn disarmed_interceptor_lets_clicks_through() {
    let hits = Rc::new(Cell::new(0));
    let mut interceptor = ClickInterceptor::default();
    let counter = Rc::clone(&hits);
    interceptor.arm(move || counter.set(counter.get() + 1));
    interceptor.disarm();
    assert!(click_body());
    assert_eq!(hits.get(), 0);
}

#[wasm_bindgen_test]
fn dropping_the_interceptor_removes_the_listener() {
    let hits = Rc::new(Cell::new(0));
    {
        let mut interceptor = ClickInterceptor::default();
        let counter = Rc::clone(&hits);
        interceptor.arm(move || counter.set(counter.get() + 1));
    }
    assert!(click_body());
    assert_eq!(hits.get(), 0);
}
