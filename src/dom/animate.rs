//! Scroll-triggered entrances, stat counters and the page-load hero stagger.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{after, document, listen, query_all, ready_state, set_class, set_style, window};
use crate::config::{SiteConfig, Timings};
use crate::consts::{
    CLASS_FADE_IN_UP, CLASS_LOADED, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SEL_HERO_TEXT_CHILDREN, SEL_REVEAL_TARGETS,
    SEL_STAT_NUMBERS,
};
use crate::counter::StatCounter;
use crate::error::SiteError;
use crate::reveal::{
    HERO_HIDDEN_OPACITY, HERO_HIDDEN_TRANSFORM, HERO_SHOWN_OPACITY, HERO_SHOWN_TRANSFORM, HERO_TRANSITION, RevealSet,
    stagger_delay_ms,
};

pub fn init(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let blocks = query_all(document, SEL_REVEAL_TARGETS);
    tracing::debug!(count = blocks.len(), "observing reveal targets");
    observe_once(blocks, Some(&options), |block| set_class(block, CLASS_FADE_IN_UP, true))?;

    let steps = config.counter_steps;
    let tick_ms = config.timings.counter_tick_ms;
    observe_once(query_all(document, SEL_STAT_NUMBERS), None, move |stat| {
        let text = stat.text_content().unwrap_or_default();
        match StatCounter::parse(&text, steps) {
            Some(counter) => run_counter(stat.clone(), counter, tick_ms),
            None => tracing::debug!(%text, "stat text has no number; left as is"),
        }
    })
}

/// Watch `targets` and call `on_first` once per element, the first time it intersects.
fn observe_once(
    targets: Vec<Element>,
    options: Option<&IntersectionObserverInit>,
    on_first: impl Fn(&Element) + 'static,
) -> Result<(), SiteError> {
    let targets = Rc::new(targets);
    let seen = Rc::new(RefCell::new(RevealSet::new(targets.len())));

    let watched = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for value in entries.iter() {
                let Some(entry) = value.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = watched.iter().position(|el| *el == target) else {
                    continue;
                };
                let first = seen.borrow_mut().on_intersection(index, entry.is_intersecting());
                if first {
                    on_first(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );
    let observer = match options {
        Some(options) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?,
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();

    for target in targets.iter() {
        observer.observe(target);
    }
    Ok(())
}

/// Advance `counter` one step per tick until it lands on its target.
fn run_counter(element: Element, mut counter: StatCounter, tick_ms: u32) {
    after(tick_ms, move || {
        element.set_text_content(Some(&counter.tick()));
        if !counter.is_finished() {
            run_counter(element, counter, tick_ms);
        }
    });
}

/// Mark the body loaded and stagger the hero entrance once every resource is in.
///
/// Runs straight away when the window `load` event fired before wiring.
pub fn init_page_load(config: &SiteConfig) -> Result<(), SiteError> {
    let timings = config.timings;
    if ready_state(&document()?).is_loaded() {
        tracing::debug!("page already loaded; running entrance now");
        play_entrance(timings);
        return Ok(());
    }
    listen(&window()?.into(), "load", move |_| play_entrance(timings))
}

fn play_entrance(timings: Timings) {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(error = %e, "page-load animation skipped");
            return;
        }
    };
    if let Some(body) = document.body() {
        set_class(&body, CLASS_LOADED, true);
    }
    for (index, element) in query_all(&document, SEL_HERO_TEXT_CHILDREN).into_iter().enumerate() {
        set_style(&element, "opacity", HERO_HIDDEN_OPACITY);
        set_style(&element, "transform", HERO_HIDDEN_TRANSFORM);
        set_style(&element, "transition", HERO_TRANSITION);
        after(stagger_delay_ms(index, &timings), move || {
            set_style(&element, "opacity", HERO_SHOWN_OPACITY);
            set_style(&element, "transform", HERO_SHOWN_TRANSFORM);
        });
    }
}
