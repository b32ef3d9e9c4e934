//! Theme toggle bindings.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryListEvent};

use super::{after, by_id, listen, set_style, warn_js, window};
use crate::config::{SiteConfig, Timings};
use crate::consts::{ATTR_COLOR_SCHEME, ID_THEME_TOGGLE, MEDIA_PREFERS_DARK, SEL_THEME_ICON};
use crate::error::SiteError;
use crate::storage::LocalStore;
use crate::theme::{Theme, ThemeController};

const BODY_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";
const PRESSED: &str = "scale(0.95)";
const RELEASED: &str = "scale(1)";

pub fn init(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let toggle = by_id(document, ID_THEME_TOGGLE)?;
    let icon = toggle.query_selector(SEL_THEME_ICON)?;
    let media = window()?.match_media(MEDIA_PREFERS_DARK)?;
    let system_dark = media.as_ref().is_some_and(web_sys::MediaQueryList::matches);

    let controller = ThemeController::init(LocalStore, &config.theme_storage_key, system_dark);
    apply(document, icon.as_ref(), controller.applied(), config.timings);
    let controller = Rc::new(RefCell::new(controller));

    {
        let controller = Rc::clone(&controller);
        let document = document.clone();
        let icon = icon.clone();
        let pressed = toggle.clone();
        let timings = config.timings;
        listen(&toggle, "click", move |event| {
            event.prevent_default();
            let theme = controller.borrow_mut().toggle();
            tracing::info!(%theme, "theme toggled");
            apply(&document, icon.as_ref(), theme, timings);
            set_style(&pressed, "transform", PRESSED);
            let released = pressed.clone();
            after(timings.toggle_pulse_ms, move || set_style(&released, "transform", RELEASED));
        })?;
    }

    match media {
        Some(media) => {
            let document = document.clone();
            let timings = config.timings;
            listen(&media, "change", move |event| {
                let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let next = controller.borrow_mut().system_changed(change.matches());
                if let Some(theme) = next {
                    tracing::info!(%theme, "following system theme");
                    apply(&document, icon.as_ref(), theme, timings);
                }
            })?;
        }
        None => tracing::debug!("colour-scheme media query unsupported"),
    }
    Ok(())
}

/// Put `theme` on the root element and the toggle icon, with a brief body transition.
fn apply(document: &Document, icon: Option<&Element>, theme: Theme, timings: Timings) {
    if let Some(root) = document.document_element() {
        if let Err(e) = root.set_attribute(ATTR_COLOR_SCHEME, theme.as_str()) {
            warn_js("setAttribute", &e);
        }
    }
    if let Some(icon) = icon {
        icon.set_class_name(theme.icon_class());
    }
    let Some(body) = document.body() else {
        return;
    };
    set_style(&body, "transition", BODY_TRANSITION);
    after(timings.theme_transition_ms, move || set_style(&body, "transition", ""));
}
