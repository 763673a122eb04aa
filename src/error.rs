//! Crate-wide error type. Browser entrypoints convert it into a `JsValue` so the
//! JS side sees a plain string message.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no {0} available")]
    MissingBrowserObject(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("canvas operation failed: {0}")]
    Canvas(String),

    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde_json")]
    #[error("failed to parse game config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl GameError {
    /// Wrap a failed web-sys call, keeping the JS-side description.
    pub(crate) fn dom(err: JsValue) -> Self {
        GameError::Dom(describe(&err))
    }

    pub(crate) fn canvas(err: JsValue) -> Self {
        GameError::Canvas(describe(&err))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
