//! Back-to-top control and hero parallax.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use super::{by_id, listen, next_frame, query_all, scroll_y, set_class, set_style, smooth_scroll_to, window};
use crate::config::SiteConfig;
use crate::consts::{CLASS_VISIBLE, ID_SCROLL_TO_TOP, SEL_HERO_SHAPES};
use crate::error::SiteError;
use crate::scroll::{ScrollEffects, translate_y};

pub fn init(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let button = by_id(document, ID_SCROLL_TO_TOP)?;
    let effects = Rc::new(RefCell::new(ScrollEffects::new(config)));

    let shapes_document = document.clone();
    let control = button.clone();
    listen(&window()?.into(), "scroll", move |_| {
        if !effects.borrow_mut().on_scroll() {
            return;
        }
        let effects = Rc::clone(&effects);
        let document = shapes_document.clone();
        let control = control.clone();
        next_frame(move || {
            let shapes = query_all(&document, SEL_HERO_SHAPES);
            let frame = effects.borrow_mut().recompute(scroll_y(), shapes.len());
            set_class(&control, CLASS_VISIBLE, frame.back_to_top.is_visible());
            for (shape, offset) in shapes.iter().zip(frame.shape_offsets) {
                set_style(shape, "transform", &translate_y(offset));
            }
        });
    })?;

    listen(&button, "click", |event| {
        event.prevent_default();
        smooth_scroll_to(0.0);
    })
}
