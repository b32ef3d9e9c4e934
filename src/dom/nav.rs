//! Navigation bindings: hamburger menu, link clicks and the scroll-driven
//! active-link / navbar refresh.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use super::{listen, next_frame, offset_box, query_all, scroll_y, set_class, set_style, smooth_scroll_to, window};
use crate::config::SiteConfig;
use crate::consts::{CLASS_ACTIVE, ID_HAMBURGER, ID_NAV_MENU, ID_NAVBAR, SEL_NAV_LINKS, SEL_SECTIONS};
use crate::error::SiteError;
use crate::layout::SectionBox;
use crate::nav::NavController;

/// Live navigation wiring, shared with the keyboard controller.
#[derive(Clone)]
pub struct NavBinding {
    controller: Rc<RefCell<NavController>>,
    /// Hamburger button and menu panel; toggling needs both.
    menu: Option<(Element, Element)>,
    links: Rc<Vec<Element>>,
    navbar: Option<Element>,
}

impl NavBinding {
    /// Close the mobile menu. Returns `true` if it was open.
    pub fn close_menu(&self) -> bool {
        let was_open = self.controller.borrow_mut().close_menu();
        self.render_menu();
        was_open
    }

    fn render_menu(&self) {
        let open = self.controller.borrow().menu().is_open();
        if let Some((button, panel)) = &self.menu {
            set_class(button, CLASS_ACTIVE, open);
            set_class(panel, CLASS_ACTIVE, open);
        }
    }

    fn render_links(&self) {
        let controller = self.controller.borrow();
        for (index, link) in self.links.iter().enumerate() {
            set_class(link, CLASS_ACTIVE, controller.is_active(index));
        }
    }

    fn navbar_height(&self) -> Option<f64> {
        let navbar = self.navbar.as_ref()?.dyn_ref::<HtmlElement>()?;
        Some(f64::from(navbar.offset_height()))
    }

    fn link_clicked(&self, document: &Document, index: usize, event: &Event) {
        let target = self.controller.borrow().target_of(index).map(str::to_owned);
        // Links to other pages keep their default navigation.
        if target.is_some() {
            event.prevent_default();
        }
        let section = target
            .as_deref()
            .and_then(|id| document.get_element_by_id(id))
            .map(|el| offset_box(&el));
        let offset = self
            .controller
            .borrow_mut()
            .link_clicked(index, section.as_ref(), self.navbar_height());
        self.render_menu();
        if let Some(top) = offset {
            self.render_links();
            smooth_scroll_to(top);
        }
    }

    fn refresh(&self, document: &Document) {
        let sections: Vec<SectionBox> = query_all(document, SEL_SECTIONS).iter().map(offset_box).collect();
        let style = self.controller.borrow_mut().recompute(scroll_y(), &sections);
        self.render_links();
        if let Some(navbar) = &self.navbar {
            set_style(navbar, "background", style.background());
            set_style(navbar, "backdrop-filter", style.backdrop_filter());
        }
    }
}

pub fn init(document: &Document, config: &SiteConfig) -> Result<NavBinding, SiteError> {
    let links = query_all(document, SEL_NAV_LINKS);
    let hrefs: Vec<String> = links.iter().map(|link| link.get_attribute("href").unwrap_or_default()).collect();
    let menu = document
        .get_element_by_id(ID_HAMBURGER)
        .zip(document.get_element_by_id(ID_NAV_MENU));
    if menu.is_none() {
        tracing::debug!("hamburger or menu panel missing; menu toggle disabled");
    }

    let binding = NavBinding {
        controller: Rc::new(RefCell::new(NavController::new(&hrefs, config))),
        menu,
        links: Rc::new(links),
        navbar: document.get_element_by_id(ID_NAVBAR),
    };

    if let Some((button, _)) = &binding.menu {
        let this = binding.clone();
        listen(button, "click", move |_| {
            this.controller.borrow_mut().toggle_menu();
            this.render_menu();
        })?;
    }

    for (index, link) in binding.links.iter().enumerate() {
        let this = binding.clone();
        let document = document.clone();
        listen(link, "click", move |event| this.link_clicked(&document, index, &event))?;
    }

    let this = binding.clone();
    let scroll_document = document.clone();
    listen(&window()?.into(), "scroll", move |_| {
        if !this.controller.borrow_mut().on_scroll() {
            return;
        }
        let this = this.clone();
        let document = scroll_document.clone();
        next_frame(move || this.refresh(&document));
    })?;

    binding.refresh(document);
    tracing::debug!(links = binding.controller.borrow().link_count(), "navigation ready");
    Ok(binding)
}
