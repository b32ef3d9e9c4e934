//! Element ids, selectors and class names shared with the stylesheet.
//!
//! These strings are the contract between the behaviour layer and the markup;
//! renaming any of them breaks the page's styling.

// ── Element ids ─────────────────────────────────────────────────

pub const ID_HAMBURGER: &str = "hamburger";
pub const ID_NAV_MENU: &str = "nav-menu";
pub const ID_NAVBAR: &str = "navbar";
pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_SCROLL_TO_TOP: &str = "scroll-to-top";
pub const ID_CONTACT_FORM: &str = "contact-form";
pub const ID_FIELD_NAME: &str = "name";
pub const ID_FIELD_EMAIL: &str = "email";
pub const ID_FIELD_SUBJECT: &str = "subject";
pub const ID_FIELD_MESSAGE: &str = "message";
pub const ID_SITE_CONFIG: &str = "site-config";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_NAV_LINKS: &str = ".nav-link";
pub const SEL_SECTIONS: &str = "section";
pub const SEL_ID_SECTIONS: &str = "section[id]";
pub const SEL_HERO_SHAPES: &str = ".hero-shape";
pub const SEL_HERO_TEXT_CHILDREN: &str = ".hero-text > *";
pub const SEL_SUBMIT: &str = "button[type=\"submit\"]";
pub const SEL_STAT_NUMBERS: &str = ".stat-number";
pub const SEL_THEME_ICON: &str = "i";

/// Content blocks that fade in the first time they scroll into view.
pub const SEL_REVEAL_TARGETS: &str =
    ".section-title, .about-content, .timeline-item, .experience-card, .project-card, .cert-card, .contact-content";

// ── State classes ───────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_LOADED: &str = "loaded";
pub const CLASS_FADE_IN_UP: &str = "fade-in-up";
pub const CLASS_NOTIFICATION: &str = "notification";
pub const CLASS_NOTIFICATION_CONTENT: &str = "notification-content";
pub const CLASS_NOTIFICATION_MESSAGE: &str = "notification-message";
pub const CLASS_NOTIFICATION_CLOSE: &str = "notification-close";

// ── Attributes ──────────────────────────────────────────────────

/// Root-element attribute the stylesheet keys its palette on.
pub const ATTR_COLOR_SCHEME: &str = "data-color-scheme";

/// Media query for the operating system's dark-mode hint.
pub const MEDIA_PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

// ── Observer options ────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
