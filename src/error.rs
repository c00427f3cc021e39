// error.rs - Recoverable failures
//
// Only configuration and DOM binding can fail at runtime. Out-of-range cells,
// zero dimensions and stale buffers are caller bugs and panic instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cell size must be at least 1px, got {0}")]
    InvalidCellSize(u32),

    #[error("grid must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("target fps must be positive, got {0}")]
    InvalidFrameRate(f64),

    #[error("invalid start options: {0}")]
    Options(String),

    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element #{0}")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsError::new(&err.to_string()).into()
    }
}
