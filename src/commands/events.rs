//! Backend Event Subscriptions
//!
//! Bindings for `window.__TAURI__.event.listen`. A subscription stays active
//! until its `EventSubscription` is dropped.

use std::future::Future;

use launcher_core::{LaunchError, LaunchResult, ScopeToken, StatusUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::js_error;

pub const TERMINAL_LOG: &str = "terminal_log";
pub const PROJECT_STATUS_UPDATE: &str = "project_status_update";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Active listener; unlistens on drop
pub struct EventSubscription {
    event: &'static str,
    unlisten: js_sys::Function,
    _handler: Closure<dyn FnMut(JsValue)>,
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        log::debug!("Releasing {} listener", self.event);
        if let Err(e) = self.unlisten.call0(&JsValue::NULL) {
            log::warn!("Failed to unlisten {}: {}", self.event, js_error(e));
        }
    }
}

/// Listen to `event`, handing each payload to `on_payload`
pub async fn subscribe(
    event: &'static str,
    mut on_payload: impl FnMut(JsValue) + 'static,
) -> LaunchResult<EventSubscription> {
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event_object: JsValue| {
        match js_sys::Reflect::get(&event_object, &JsValue::from_str("payload")) {
            Ok(payload) => on_payload(payload),
            Err(e) => log::warn!("Event without payload: {}", js_error(e)),
        }
    });
    let unlisten = listen(event, &handler)
        .await
        .map_err(|e| LaunchError::invoke("listen", js_error(e)))?;
    let unlisten = unlisten
        .dyn_into::<js_sys::Function>()
        .map_err(|_| LaunchError::Decode(format!("listen({}) did not return a function", event)))?;
    log::debug!("Listening to {}", event);
    Ok(EventSubscription {
        event,
        unlisten,
        _handler: handler,
    })
}

/// `terminal_log` lines, still carrying their `"<project>: "` prefix
pub async fn subscribe_terminal_log(
    mut on_line: impl FnMut(String) + 'static,
) -> LaunchResult<EventSubscription> {
    subscribe(TERMINAL_LOG, move |payload| match payload.as_string() {
        Some(line) => on_line(line),
        None => log::warn!("Ignoring non-string {} payload", TERMINAL_LOG),
    })
    .await
}

pub async fn subscribe_status_updates(
    mut on_update: impl FnMut(StatusUpdate) + 'static,
) -> LaunchResult<EventSubscription> {
    subscribe(PROJECT_STATUS_UPDATE, move |payload| {
        match serde_wasm_bindgen::from_value::<Option<StatusUpdate>>(payload) {
            Ok(Some(update)) => on_update(update),
            Ok(None) => log::debug!("Empty {} payload", PROJECT_STATUS_UPDATE),
            Err(e) => log::warn!("Malformed {} payload: {}", PROJECT_STATUS_UPDATE, e),
        }
    })
    .await
}

/// Keep a subscription alive for as long as the current view
///
/// The subscription is released when the view is cleaned up. If `scope`
/// was cancelled before `listen` resolved, it is released right away.
pub fn subscribe_in_scope<F>(scope: ScopeToken, connect: F)
where
    F: Future<Output = LaunchResult<EventSubscription>> + 'static,
{
    let slot = StoredValue::new_local(None::<EventSubscription>);

    spawn_local(async move {
        match connect.await {
            Ok(subscription) if scope.is_cancelled() => drop(subscription),
            Ok(subscription) => {
                // Slot already disposed: the returned value is dropped here
                let _ = slot.try_set_value(Some(subscription));
            }
            Err(e) => log::error!("Failed to subscribe: {}", e),
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|subscription| subscription.take());
    });
}
