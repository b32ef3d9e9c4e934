//! Contact form bindings: validate on submit, then hand off to the mail client.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Toaster, after, by_id, listen, warn_js, window};
use crate::config::SiteConfig;
use crate::consts::{ID_CONTACT_FORM, ID_FIELD_EMAIL, ID_FIELD_MESSAGE, ID_FIELD_NAME, ID_FIELD_SUBJECT, SEL_SUBMIT};
use crate::contact::{ContactForm, ContactMessage, INVALID_FORM_MESSAGE, SubmitError};
use crate::error::SiteError;
use crate::toast::ToastKind;

pub fn init(document: &Document, config: &SiteConfig, toaster: Toaster) -> Result<(), SiteError> {
    let form = by_id(document, ID_CONTACT_FORM)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| SiteError::MissingElement(ID_CONTACT_FORM))?;
    let state = Rc::new(RefCell::new(ContactForm::new(config)));
    let delay_ms = config.timings.submit_delay_ms;

    let document = document.clone();
    let target = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let message = read_message(&document);
        let Some(button) = submit_button(&target) else {
            // Nothing to disable while pending; only the validation feedback runs.
            if !message.field_errors().is_empty() {
                toaster.show(INVALID_FORM_MESSAGE, ToastKind::Error);
            }
            tracing::warn!("contact form has no submit button; submission dropped");
            return;
        };

        let label = button.text_content().unwrap_or_default();
        let pending = state.borrow_mut().begin(message, &label).map(str::to_owned);
        match pending {
            Ok(pending) => {
                button.set_text_content(Some(&pending));
                button.set_disabled(true);
            }
            Err(SubmitError::Invalid(_)) => {
                toaster.show(INVALID_FORM_MESSAGE, ToastKind::Error);
                return;
            }
            Err(SubmitError::AlreadySending) => {
                tracing::debug!("submit ignored; handoff already pending");
                return;
            }
        }

        let state = Rc::clone(&state);
        let toaster = toaster.clone();
        let form = target.clone();
        after(delay_ms, move || {
            let Some(uri) = state.borrow().pending_uri() else {
                return;
            };
            let opened = match window().map(|w| w.location().set_href(&uri)) {
                Ok(Ok(())) => true,
                Ok(Err(e)) => {
                    warn_js("location.href", &e);
                    false
                }
                Err(e) => {
                    tracing::warn!(error = %e, "no window for mail handoff");
                    false
                }
            };
            let Some(outcome) = state.borrow_mut().complete(opened) else {
                return;
            };
            toaster.show(&outcome.toast_message, outcome.toast_kind);
            form.reset();
            button.set_text_content(Some(&outcome.restore_label));
            button.set_disabled(false);
        });
    })
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    let found = match form.query_selector(SEL_SUBMIT) {
        Ok(found) => found,
        Err(e) => {
            warn_js("querySelector", &e);
            None
        }
    };
    found?.dyn_ref::<HtmlButtonElement>().cloned()
}

fn read_message(document: &Document) -> ContactMessage {
    ContactMessage {
        name: field_value(document, ID_FIELD_NAME),
        email: field_value(document, ID_FIELD_EMAIL),
        subject: field_value(document, ID_FIELD_SUBJECT),
        message: field_value(document, ID_FIELD_MESSAGE),
    }
}

/// Current value of an input or textarea; empty when the field is missing.
fn field_value(document: &Document, id: &str) -> String {
    let Some(field) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
