//! Add-Project Form State
//!
//! Draft project plus the two small state machines of the modal: the
//! script dropdown and the directory picker.

use std::fmt::Display;

use crate::models::{Project, RunScript};

/// Custom script dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptDropdown {
    #[default]
    Closed,
    Open,
}

impl ScriptDropdown {
    pub fn toggle(&mut self) {
        *self = match self {
            ScriptDropdown::Closed => ScriptDropdown::Open,
            ScriptDropdown::Open => ScriptDropdown::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = ScriptDropdown::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ScriptDropdown::Open)
    }
}

/// Native directory dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Idle,
    /// Dialog is open; the trigger is disabled
    Selecting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProjectForm {
    pub draft: Project,
    pub dropdown: ScriptDropdown,
    pub picker: PickerState,
    default_script: RunScript,
}

impl Default for AddProjectForm {
    fn default() -> Self {
        Self::new(RunScript::default())
    }
}

impl AddProjectForm {
    pub fn new(default_script: RunScript) -> Self {
        Self {
            draft: Project::draft(default_script),
            dropdown: ScriptDropdown::Closed,
            picker: PickerState::Idle,
            default_script,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_path(&mut self, path: String) {
        self.draft.path = path;
    }

    pub fn set_desc(&mut self, desc: String) {
        self.draft.desc = desc;
    }

    /// Pick a script from the dropdown and close it
    pub fn select_script(&mut self, script: RunScript) {
        self.draft.script = script;
        self.dropdown.close();
    }

    /// Enter the selecting state; `false` if a dialog is already open
    pub fn begin_pick(&mut self) -> bool {
        if self.picker == PickerState::Selecting {
            return false;
        }
        self.picker = PickerState::Selecting;
        true
    }

    /// Leave the selecting state, taking the dialog result
    ///
    /// Only a non-empty path overwrites the draft; a cancelled dialog or an
    /// error leaves it as it was. Returns whether the path changed.
    pub fn finish_pick<E: Display>(&mut self, result: Result<Option<String>, E>) -> bool {
        self.picker = PickerState::Idle;
        match result {
            Ok(Some(path)) if !path.is_empty() => {
                self.draft.path = path;
                true
            }
            Ok(_) => false,
            Err(e) => {
                log::error!("Failed to open directory picker: {}", e);
                false
            }
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.picker == PickerState::Selecting
    }

    /// Modal dismissed without submitting; the draft is kept
    pub fn dismiss(&mut self) {
        self.dropdown.close();
        self.picker = PickerState::Idle;
    }

    /// Back to a blank draft
    pub fn reset(&mut self) {
        *self = Self::new(self.default_script);
    }
}
