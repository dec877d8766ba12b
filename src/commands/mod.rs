//! Tauri Command Wrappers
//!
//! Frontend bindings to the backend, organized by domain.

mod project;
mod dialog;
pub mod events;

use launcher_core::{LaunchError, LaunchResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // `catch`: backend commands reject with a message string on failure
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use project::*;
pub use dialog::*;

/// Text of a rejected promise
pub(crate) fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn to_args<A: Serialize>(command: &'static str, args: &A) -> LaunchResult<JsValue> {
    serde_wasm_bindgen::to_value(args)
        .map_err(|e| LaunchError::invoke(command, format!("Serialization error: {}", e)))
}

/// Invoke a command and decode its result
async fn call<T: DeserializeOwned>(command: &'static str, args: JsValue) -> LaunchResult<T> {
    let result = invoke(command, args)
        .await
        .map_err(|e| LaunchError::invoke(command, js_error(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| LaunchError::Decode(e.to_string()))
}

/// Invoke a command that returns `()` on success
async fn call_unit(command: &'static str, args: JsValue) -> LaunchResult<()> {
    invoke(command, args)
        .await
        .map(|_| ())
        .map_err(|e| LaunchError::invoke(command, js_error(e)))
}
