//! Backend Boundary
//!
//! The process-management service the UI talks to. The frontend implements
//! this over Tauri `invoke`; tests use an in-memory double.

use async_trait::async_trait;

use crate::error::LaunchResult;
use crate::models::{Project, ProjectStatus, RunScript};

/// Request/response surface of the backend
///
/// Futures are not `Send`: the frontend runs on a single-threaded wasm
/// event loop and its bindings hold `JsValue`s across awaits.
#[async_trait(?Send)]
pub trait Backend {
    /// All saved projects, in backend order
    async fn get_projects(&self) -> LaunchResult<Vec<Project>>;

    async fn add_project(&self, project: &Project) -> LaunchResult<()>;

    async fn delete_project(&self, name: &str) -> LaunchResult<()>;

    async fn start_project(&self, name: &str, path: &str, script: RunScript) -> LaunchResult<()>;

    async fn stop_project(&self, name: &str) -> LaunchResult<()>;

    async fn get_project_status(&self, name: &str) -> LaunchResult<ProjectStatus>;
}
