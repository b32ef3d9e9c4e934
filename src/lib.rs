//! Client-side behaviour layer for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Every
//! controller is a small state machine that reacts to one kind of DOM event
//! (click, scroll, keydown, load, intersection) and reports what the page
//! should look like next. The [`dom`] module (behind the `hydrate` feature)
//! wires those state machines to the real document and projects their state
//! onto the class names and inline styles the stylesheet expects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Mobile menu, smooth link scrolling, active-link tracking |
//! | [`theme`] | Light/dark theme selection and persistence |
//! | [`scroll`] | Back-to-top visibility and hero parallax |
//! | [`contact`] | Contact form validation and `mailto:` composition |
//! | [`counter`] | Stat counter parsing and fixed-step animation |
//! | [`reveal`] | One-shot fade-in tracking and hero entrance stagger |
//! | [`toast`] | Single-slot notification lifecycle |
//! | [`keyboard`] | Escape / arrow-key section navigation |
//! | [`ready`] | Document lifecycle from `readyState` |
//! | [`layout`] | Section geometry and the probe-point lookup |
//! | [`frame`] | Per-controller "one update per frame" gate |
//! | [`storage`] | Preference store abstraction |
//! | [`config`] | Tunable thresholds, timings and literals |
//! | [`consts`] | Element ids and class names shared with the stylesheet |
//! | [`error`] | Crate-level error type |

pub mod config;
pub mod consts;
pub mod contact;
pub mod counter;
pub mod error;
pub mod frame;
pub mod keyboard;
pub mod layout;
pub mod nav;
pub mod ready;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod toast;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point. Installs console logging, then wires every controller
/// once the document has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    dom::boot();
}
