//! Launcher Models
//!
//! Data structures matching backend entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LaunchError;

/// Run script the backend executes for a project (`npm run <script>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunScript {
    #[default]
    Start,
    Dev,
    Build,
}

impl RunScript {
    /// All scripts in dropdown order
    pub const ALL: [RunScript; 3] = [RunScript::Start, RunScript::Dev, RunScript::Build];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            RunScript::Start => "start",
            RunScript::Dev => "dev",
            RunScript::Build => "build",
        }
    }

    /// Label shown in the script dropdown
    pub fn label(&self) -> &'static str {
        match self {
            RunScript::Start => "Start",
            RunScript::Dev => "Development",
            RunScript::Build => "Build",
        }
    }
}

impl fmt::Display for RunScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunScript {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(RunScript::Start),
            "dev" => Ok(RunScript::Dev),
            "build" => Ok(RunScript::Build),
            other => Err(LaunchError::InvalidInput(format!("unknown run script '{}'", other))),
        }
    }
}

/// A registered project (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: String,
    pub desc: String,
    pub script: RunScript,
}

impl Project {
    pub fn new(name: impl Into<String>, path: impl Into<String>, desc: impl Into<String>, script: RunScript) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            desc: desc.into(),
            script,
        }
    }

    /// Blank draft with the given default script
    pub fn draft(script: RunScript) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// Whether the name passes the submit guard
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Backend-reported run state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub running: bool,
    #[serde(default)]
    pub pid: Option<u32>,
}

impl ProjectStatus {
    pub fn running(pid: u32) -> Self {
        Self { running: true, pid: Some(pid) }
    }

    pub fn stopped() -> Self {
        Self::default()
    }
}

/// Payload of a `project_status_update` event
///
/// `name` is absent on the observed wire shape; when a backend sends it,
/// the update is applied to that project without correlation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub running: bool,
    #[serde(default)]
    pub pid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StatusUpdate {
    pub fn status(&self) -> ProjectStatus {
        ProjectStatus {
            running: self.running,
            pid: self.pid,
        }
    }
}

impl From<ProjectStatus> for StatusUpdate {
    fn from(status: ProjectStatus) -> Self {
        Self {
            running: status.running,
            pid: status.pid,
            name: None,
        }
    }
}
