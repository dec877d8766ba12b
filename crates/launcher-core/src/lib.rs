//! Launcher Core
//!
//! Everything the project launcher UI knows that is not DOM:
//! - models: entities shared with the backend
//! - backend: the invoke boundary as a trait
//! - controller: commands, refresh policy, scoped execution
//! - state: the single application state object
//! - status: correlation of status events to projects
//! - terminal: per-project log feed with a bounded buffer
//! - form: add-project draft, script dropdown, directory picker
//! - config: user-tunable settings

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod models;
pub mod scope;
pub mod state;
pub mod status;
pub mod terminal;

pub use backend::Backend;
pub use config::{LauncherConfig, StatusConfig, TerminalConfig, CONFIG_STORAGE_KEY};
pub use controller::{Command, CommandOutcome, Controller, Refresh, RefreshSnapshot};
pub use error::{LaunchError, LaunchResult};
pub use form::{AddProjectForm, PickerState, ScriptDropdown};
pub use models::{Project, ProjectStatus, RunScript, StatusUpdate};
pub use scope::ScopeToken;
pub use state::{ActiveView, AppState, ProjectCard, RunControl};
pub use status::{CorrelationPolicy, StatusCell, StatusMap, StatusResolution};
pub use terminal::{LogBuffer, TerminalFeed};
