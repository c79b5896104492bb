use thiserror::Error;

/// Host-platform failures. Unknown variant ids, empty viewports and repeated
/// teardown are not errors and never end up here.
#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for BackgroundError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        BackgroundError::Dom(format!("{value:?}"))
    }
}

impl From<BackgroundError> for wasm_bindgen::JsValue {
    fn from(err: BackgroundError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = BackgroundError> = std::result::Result<T, E>;
