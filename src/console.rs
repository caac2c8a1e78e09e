//! Browser console logging for user actions.
//!
//! Every entry is a message plus an optional structured payload; payloads are
//! converted from their `Serialize` impl so they show up as inspectable objects.

use serde::Serialize;
use wasm_bindgen::JsValue;

fn payload<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value)
        .unwrap_or_else(|e| JsValue::from_str(&format!("<unserializable: {e}>")))
}

/// A user action with the record it touched.
pub fn log<T: Serialize + ?Sized>(message: &str, value: &T) {
    web_sys::console::log_2(&message.into(), &payload(value));
}

pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Rejected form input; not an error from the user's point of view.
pub fn debug(message: &str, reason: &impl std::fmt::Display) {
    web_sys::console::debug_1(&format!("{message}: {reason}").into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
