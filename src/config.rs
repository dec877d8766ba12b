//! Config Loading
//!
//! Reads the launcher config document from `localStorage`.

use launcher_core::{LauncherConfig, CONFIG_STORAGE_KEY};

fn stored_document() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}

/// Stored config, or defaults if absent or invalid
pub fn load_config() -> LauncherConfig {
    let Some(raw) = stored_document() else {
        log::debug!("No stored config under {}, using defaults", CONFIG_STORAGE_KEY);
        return LauncherConfig::default();
    };
    match LauncherConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_STORAGE_KEY);
            config
        }
        Err(e) => {
            log::warn!("Ignoring stored config: {}", e);
            LauncherConfig::default()
        }
    }
}
