//! Status Correlation
//!
//! `project_status_update` events usually carry no project name, only
//! `running` and an optional pid. This module decides which cached project
//! an event belongs to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Project, ProjectStatus, StatusUpdate};

/// Cached status of one project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCell {
    Known(ProjectStatus),
    /// An event may have been about this project but could not be attributed
    Unknown,
}

impl StatusCell {
    pub fn pid(&self) -> Option<u32> {
        match self {
            StatusCell::Known(status) => status.pid,
            StatusCell::Unknown => None,
        }
    }
}

/// Project name -> latest cached status
pub type StatusMap = HashMap<String, StatusCell>;

/// What to do when a pid-less event matches more than one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationPolicy {
    /// Mark every candidate unknown instead of guessing
    #[default]
    Strict,
    /// Update the first candidate in project-list order
    FirstMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusResolution {
    Apply(String),
    Ambiguous(Vec<String>),
    Unmatched,
}

/// Attribute a status event to a project
///
/// `order` gives the iteration order; only projects with a cached entry in
/// `statuses` take part, unless the event names its project.
pub fn correlate(
    update: &StatusUpdate,
    order: &[Project],
    statuses: &StatusMap,
    policy: CorrelationPolicy,
) -> StatusResolution {
    if let Some(name) = &update.name {
        return if order.iter().any(|p| &p.name == name) {
            StatusResolution::Apply(name.clone())
        } else {
            StatusResolution::Unmatched
        };
    }

    let cached: Vec<(&str, &StatusCell)> = order
        .iter()
        .filter_map(|p| statuses.get(&p.name).map(|cell| (p.name.as_str(), cell)))
        .collect();

    let without_pid: Vec<&str> = cached
        .iter()
        .filter(|(_, cell)| cell.pid().is_none())
        .map(|(name, _)| *name)
        .collect();

    // An absent pid matches an absent pid. A fresh pid of a starting
    // process falls back to the entries that have none yet.
    let candidates: Vec<&str> = match update.pid {
        Some(pid) => {
            let exact: Vec<&str> = cached
                .iter()
                .filter(|(_, cell)| cell.pid() == Some(pid))
                .map(|(name, _)| *name)
                .collect();
            match (exact.is_empty(), update.running) {
                (false, _) => exact,
                (true, true) => without_pid,
                (true, false) => Vec::new(),
            }
        }
        None => without_pid,
    };

    match (policy, candidates.as_slice()) {
        (_, []) => StatusResolution::Unmatched,
        (CorrelationPolicy::FirstMatch, [first, ..]) => StatusResolution::Apply(first.to_string()),
        (CorrelationPolicy::Strict, [only]) => StatusResolution::Apply(only.to_string()),
        (CorrelationPolicy::Strict, many) => {
            StatusResolution::Ambiguous(many.iter().map(|s| s.to_string()).collect())
        }
    }
}
