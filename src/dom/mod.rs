//! Browser bindings: wires each controller to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers in the crate root are plain state machines. The modules here
//! read geometry and input from the DOM, feed it to those machines, and
//! project the resulting state back onto class names and inline styles.
//! Every controller is wired independently; one that cannot find its anchors
//! is skipped and the rest still run.

mod animate;
mod contact;
mod effects;
mod keyboard;
mod nav;
mod theme;
mod toast;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::config::SiteConfig;
use crate::consts::ID_SITE_CONFIG;
use crate::error::SiteError;
use crate::layout::SectionBox;
use crate::ready::ReadyState;

pub use toast::Toaster;

/// Run the page initialization once the document has been parsed.
pub fn boot() {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(error = %e, "behaviour layer disabled");
            return;
        }
    };
    if ready_state(&document).is_parsed() {
        init_all();
    } else if let Err(e) = listen(&document, "DOMContentLoaded", |_| init_all()) {
        tracing::warn!(error = %e, "could not wait for DOMContentLoaded");
    }
}

fn init_all() {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(error = %e, "behaviour layer disabled");
            return;
        }
    };
    let config = load_config(&document);
    let toaster = Toaster::new(config.timings);

    let nav = report("navigation", nav::init(&document, &config));
    report("theme", theme::init(&document, &config));
    report("scroll effects", effects::init(&document, &config));
    report("contact form", contact::init(&document, &config, toaster));
    report("animations", animate::init(&document, &config));
    report("page load", animate::init_page_load(&config));
    report("keyboard", keyboard::init(&document, &config, nav));
}

fn report<T>(controller: &'static str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => {
            tracing::info!(controller, "wired");
            Some(value)
        }
        Err(SiteError::MissingElement(element)) => {
            tracing::warn!(controller, element, "anchor missing; controller disabled");
            None
        }
        Err(e) => {
            tracing::warn!(controller, error = %e, "controller disabled");
            None
        }
    }
}

/// Site config from the inline JSON block, or defaults.
fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(ID_SITE_CONFIG).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "site config ignored; using defaults");
            SiteConfig::default()
        }
    }
}

// ── Lookup ──────────────────────────────────────────────────────

pub(crate) fn ready_state(document: &Document) -> ReadyState {
    ReadyState::from_dom(&document.ready_state())
}

pub(crate) fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoDocument)
}

pub(crate) fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub(crate) fn by_id(document: &Document, id: &'static str) -> Result<Element, SiteError> {
    document.get_element_by_id(id).ok_or(SiteError::MissingElement(id))
}

/// All elements matching `selector`, in document order. Invalid selectors match nothing.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            warn_js("querySelectorAll", &e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

// ── Mutation ────────────────────────────────────────────────────

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        warn_js("classList.toggle", &e);
    }
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = html.style().set_property(property, value) {
        warn_js("style.setProperty", &e);
    }
}

pub(crate) fn warn_js(call: &'static str, error: &JsValue) {
    tracing::warn!(call, error = ?error, "browser call failed");
}

// ── Events and scheduling ───────────────────────────────────────

/// Attach a listener for the lifetime of the page.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `task` on the next animation frame, or right away if frames are unavailable.
pub(crate) fn next_frame(task: impl FnOnce() + 'static) {
    let slot = Rc::new(RefCell::new(Some(task)));
    let Some(window) = web_sys::window() else {
        run_slot(&slot);
        return;
    };
    let slot_for_cb = Rc::clone(&slot);
    let callback = Closure::once_into_js(move |_ts: f64| run_slot(&slot_for_cb));
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        warn_js("requestAnimationFrame", &e);
        run_slot(&slot);
    }
}

/// Run `task` once after `delay_ms`. The callback is released after it runs.
///
/// Use a stored `gloo_timers` `Timeout` instead when the timer must be cancellable.
pub(crate) fn after(delay_ms: u32, task: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(delay_ms, "no window; deferred task dropped");
        return;
    };
    let callback = Closure::once_into_js(task);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay) {
        warn_js("setTimeout", &e);
    }
}

fn run_slot<F: FnOnce()>(slot: &Rc<RefCell<Option<F>>>) {
    let task = slot.borrow_mut().take();
    if let Some(task) = task {
        task();
    }
}

// ── Geometry and scrolling ──────────────────────────────────────

pub(crate) fn scroll_y() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    window.scroll_y().unwrap_or_else(|e| {
        warn_js("scrollY", &e);
        0.0
    })
}

pub(crate) fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub(crate) fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn element_id(element: &Element) -> Option<String> {
    let id = element.id();
    (!id.is_empty()).then_some(id)
}

/// Layout box from `offsetTop` / `clientHeight`.
pub(crate) fn offset_box(element: &Element) -> SectionBox {
    let top = element.dyn_ref::<HtmlElement>().map_or(0, HtmlElement::offset_top);
    SectionBox { id: element_id(element), top: f64::from(top), height: f64::from(element.client_height()) }
}

/// Layout box from the viewport rect, shifted into document coordinates.
pub(crate) fn rect_box(element: &Element, scroll_y: f64) -> SectionBox {
    let rect = element.get_bounding_client_rect();
    SectionBox { id: element_id(element), top: rect.top() + scroll_y, height: rect.height() }
}
