use launcher_core::{LaunchError, LaunchResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "dialog"], js_name = open, catch)]
    async fn open_dialog(options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct OpenDialogOptions {
    directory: bool,
    multiple: bool,
}

/// Native directory picker; `None` when the user cancels
pub async fn pick_directory() -> LaunchResult<Option<String>> {
    let options = serde_wasm_bindgen::to_value(&OpenDialogOptions { directory: true, multiple: false })
        .map_err(|e| LaunchError::invoke("dialog.open", e.to_string()))?;
    let result = open_dialog(options)
        .await
        .map_err(|e| LaunchError::invoke("dialog.open", js_error(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| LaunchError::Decode(e.to_string()))
}
