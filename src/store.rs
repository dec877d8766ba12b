//! Global Application State Store
//!
//! Uses Leptos reactive_stores so the project list and the add form
//! re-render independently.

use launcher_core::{AddProjectForm, AppState, LauncherConfig};
use reactive_stores::Store;

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Projects, statuses, active surface
    pub app: AppState,
    /// Add-project modal contents
    pub form: AddProjectForm,
}

impl UiState {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            app: AppState::new(config),
            form: AddProjectForm::new(config.default_script),
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;
