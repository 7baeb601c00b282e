use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by the browser glue in [`crate::dom`].
///
/// None of these are shown to visitors. Hooks log them and skip the effect
/// that failed, so the static content keeps rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl PageError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
