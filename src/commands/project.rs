//! Project Commands
//!
//! Frontend bindings for project and process commands.

use async_trait::async_trait;
use launcher_core::{Backend, LaunchResult, Project, ProjectStatus, RunScript};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, call_unit, to_args};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ProjectArgs<'a> {
    project: &'a Project,
}

#[derive(Serialize)]
struct NameArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct StartProjectArgs<'a> {
    name: &'a str,
    path: &'a str,
    script: RunScript,
}

// ========================
// Commands
// ========================

pub async fn get_projects() -> LaunchResult<Vec<Project>> {
    call("get_projects", JsValue::NULL).await
}

pub async fn add_project(project: &Project) -> LaunchResult<()> {
    let js_args = to_args("add_project", &ProjectArgs { project })?;
    call_unit("add_project", js_args).await
}

pub async fn delete_project(name: &str) -> LaunchResult<()> {
    let js_args = to_args("delete_project", &NameArgs { name })?;
    call_unit("delete_project", js_args).await
}

pub async fn start_project(name: &str, path: &str, script: RunScript) -> LaunchResult<()> {
    let js_args = to_args("start_project", &StartProjectArgs { name, path, script })?;
    call_unit("start_project", js_args).await
}

pub async fn stop_project(name: &str) -> LaunchResult<()> {
    let js_args = to_args("stop_project", &NameArgs { name })?;
    call_unit("stop_project", js_args).await
}

pub async fn get_project_status(name: &str) -> LaunchResult<ProjectStatus> {
    let js_args = to_args("get_project_status", &NameArgs { name })?;
    call("get_project_status", js_args).await
}

/// `Backend` over the Tauri invoke bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBackend;

#[async_trait(?Send)]
impl Backend for TauriBackend {
    async fn get_projects(&self) -> LaunchResult<Vec<Project>> {
        get_projects().await
    }

    async fn add_project(&self, project: &Project) -> LaunchResult<()> {
        add_project(project).await
    }

    async fn delete_project(&self, name: &str) -> LaunchResult<()> {
        delete_project(name).await
    }

    async fn start_project(&self, name: &str, path: &str, script: RunScript) -> LaunchResult<()> {
        start_project(name, path, script).await
    }

    async fn stop_project(&self, name: &str) -> LaunchResult<()> {
        stop_project(name).await
    }

    async fn get_project_status(&self, name: &str) -> LaunchResult<ProjectStatus> {
        get_project_status(name).await
    }
}
