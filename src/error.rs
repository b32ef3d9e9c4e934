//! Crate-level error type.
//!
//! Nothing here is ever surfaced to the page's host environment: controller
//! setup failures are logged and only disable the controller that hit them.

use crate::config::ConfigError;
use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("required element `{0}` is not on the page")]
    MissingElement(&'static str),
    #[error("browser window or document is unavailable")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
