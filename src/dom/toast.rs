//! Renders the [`ToastCenter`] as a fixed-position notification element.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event};

use super::{after, document, query_all, set_style, warn_js};
use crate::config::Timings;
use crate::consts::{
    CLASS_NOTIFICATION, CLASS_NOTIFICATION_CLOSE, CLASS_NOTIFICATION_CONTENT, CLASS_NOTIFICATION_MESSAGE,
};
use crate::error::SiteError;
use crate::toast::{ToastCenter, ToastId, ToastKind, ToastPhase};

const TOAST_STYLE: &str = "position: fixed; top: 90px; right: 20px; background: var(--color-surface); \
    border: 1px solid var(--color-border); border-radius: 12px; padding: 16px 20px; \
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05); \
    z-index: 1001; max-width: 400px; min-width: 300px; transform: translateX(420px); \
    transition: transform 0.3s cubic-bezier(0.16, 1, 0.3, 1); font-family: var(--font-family-base);";
const CONTENT_STYLE: &str = "display: flex; justify-content: space-between; align-items: center; gap: 12px;";
const MESSAGE_STYLE: &str = "color: var(--color-text); font-weight: 500; flex: 1;";
const CLOSE_STYLE: &str = "background: none; border: none; font-size: 20px; cursor: pointer; \
    color: var(--color-text-secondary); padding: 0; width: 20px; height: 20px; display: flex; \
    align-items: center; justify-content: center;";

/// Close-button listener, detached when its toast is evicted or removed.
struct CloseBinding {
    button: Element,
    handler: Closure<dyn FnMut(Event)>,
}

impl Drop for CloseBinding {
    fn drop(&mut self) {
        let callback = self.handler.as_ref().unchecked_ref();
        if let Err(e) = self.button.remove_event_listener_with_callback("click", callback) {
            warn_js("removeEventListener", &e);
        }
    }
}

struct Slot {
    center: ToastCenter<CloseBinding>,
    element: Option<Element>,
    /// Pending auto-dismiss; dropping it cancels the timer.
    auto_dismiss: Option<Timeout>,
}

/// Shared handle for showing toasts from any controller.
#[derive(Clone)]
pub struct Toaster {
    slot: Rc<RefCell<Slot>>,
    timings: Timings,
}

impl Toaster {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot { center: ToastCenter::new(), element: None, auto_dismiss: None })),
            timings,
        }
    }

    /// Show `message`, replacing whatever toast is up.
    pub fn show(&self, message: &str, kind: ToastKind) {
        if let Err(e) = self.try_show(message, kind) {
            tracing::warn!(error = %e, %kind, "toast not shown");
        }
    }

    fn try_show(&self, message: &str, kind: ToastKind) -> Result<(), SiteError> {
        let document = document()?;
        evict_strays(&document);

        let id = {
            let mut slot = self.slot.borrow_mut();
            slot.auto_dismiss = None;
            if let Some(old) = slot.element.take() {
                old.remove();
            }
            slot.center.show(message, kind).id
        };

        let (element, close) = build(&document, message, kind)?;
        let body = document.body().ok_or(SiteError::NoDocument)?;
        body.append_child(&element)?;

        let this = self.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let cancelled = this.slot.borrow_mut().auto_dismiss.take();
            drop(cancelled);
            this.dismiss(id);
        });
        close.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;

        let this = self.clone();
        let auto = Timeout::new(self.timings.toast_lifetime_ms, move || this.dismiss(id));
        {
            let mut slot = self.slot.borrow_mut();
            slot.element = Some(element);
            slot.auto_dismiss = Some(auto);
            if !slot.center.attach(id, CloseBinding { button: close, handler }) {
                tracing::debug!(id = id.get(), "toast replaced before its close button was bound");
            }
        }

        let this = self.clone();
        after(self.timings.toast_enter_ms, move || this.reveal(id));
        Ok(())
    }

    fn reveal(&self, id: ToastId) {
        let mut slot = self.slot.borrow_mut();
        if slot.center.reveal(id) {
            if let Some(element) = slot.element.as_ref() {
                set_style(element, "transform", ToastPhase::Shown.transform());
            }
        }
    }

    fn dismiss(&self, id: ToastId) {
        {
            let mut slot = self.slot.borrow_mut();
            if !slot.center.dismiss(id) {
                return;
            }
            if let Some(element) = slot.element.as_ref() {
                set_style(element, "transform", ToastPhase::Leaving.transform());
            }
        }
        let this = self.clone();
        after(self.timings.toast_exit_ms, move || {
            let mut slot = this.slot.borrow_mut();
            if slot.center.remove(id) {
                if let Some(element) = slot.element.take() {
                    element.remove();
                }
            }
        });
    }
}

/// Remove every notification element still in the document.
fn evict_strays(document: &Document) {
    for stray in query_all(document, &format!(".{CLASS_NOTIFICATION}")) {
        stray.remove();
    }
}

/// Build the toast element; returns it with its close button.
fn build(document: &Document, message: &str, kind: ToastKind) -> Result<(Element, Element), SiteError> {
    let toast = document.create_element("div")?;
    toast.set_class_name(&format!("{CLASS_NOTIFICATION} {}", kind.class_name()));
    toast.set_attribute("style", TOAST_STYLE)?;
    set_style(&toast, "border-color", &kind.border_color());
    set_style(&toast, "background", &kind.background());

    let content = document.create_element("div")?;
    content.set_class_name(CLASS_NOTIFICATION_CONTENT);
    content.set_attribute("style", CONTENT_STYLE)?;

    let text = document.create_element("span")?;
    text.set_class_name(CLASS_NOTIFICATION_MESSAGE);
    text.set_text_content(Some(message));
    text.set_attribute("style", MESSAGE_STYLE)?;

    let close = document.create_element("button")?;
    close.set_class_name(CLASS_NOTIFICATION_CLOSE);
    close.set_text_content(Some("\u{d7}"));
    close.set_attribute("style", CLOSE_STYLE)?;
    close.set_attribute("aria-label", "Close notification")?;

    content.append_child(&text)?;
    content.append_child(&close)?;
    toast.append_child(&content)?;
    Ok((toast, close))
}
