//! Document-level keyboard shortcuts.

use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use super::nav::NavBinding;
use super::{listen, query_all, rect_box, scroll_y, smooth_scroll_into_view};
use crate::config::SiteConfig;
use crate::consts::SEL_ID_SECTIONS;
use crate::error::SiteError;
use crate::keyboard::{KeyCommand, interpret, is_text_entry, plan_jump};
use crate::layout::{Direction, SectionBox};

pub fn init(document: &Document, config: &SiteConfig, nav: Option<NavBinding>) -> Result<(), SiteError> {
    let probe_offset = config.probe_offset_px;
    let target = document.clone();
    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let in_text = target
            .active_element()
            .is_some_and(|focused| is_text_entry(&focused.tag_name()));
        match interpret(&key.key(), in_text) {
            Some(KeyCommand::CloseMenu) => {
                if nav.as_ref().is_some_and(NavBinding::close_menu) {
                    tracing::debug!("menu closed from keyboard");
                }
            }
            Some(KeyCommand::Jump(direction)) => jump(&target, key, probe_offset, direction),
            None => {}
        }
    })
}

fn jump(document: &Document, key: &KeyboardEvent, probe_offset: f64, direction: Direction) {
    let elements = query_all(document, SEL_ID_SECTIONS);
    let y = scroll_y();
    let sections: Vec<SectionBox> = elements.iter().map(|el| rect_box(el, y)).collect();
    let Some(plan) = plan_jump(&sections, y, probe_offset, direction) else {
        return;
    };
    key.prevent_default();
    if let Some(next) = plan.to.and_then(|i| elements.get(i)) {
        smooth_scroll_into_view(next);
    }
}
