//! Errors and results.
use std::result::Result as StdResult;
use wasm_bindgen::JsValue;

// *************
// *** Error ***
// *************

pub enum Error {
    /// A DOM read failed.
    Dom(JsValue),
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        Error::Dom(err)
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
