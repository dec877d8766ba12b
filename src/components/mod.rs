//! UI Components
//!
//! Leptos views over the launcher store.

mod add_project_modal;
mod project_card;
mod project_list;
mod script_selector;
mod terminal_view;

pub use add_project_modal::AddProjectModal;
pub use project_card::ProjectCardView;
pub use project_list::ProjectListView;
pub use script_selector::ScriptSelector;
pub use terminal_view::TerminalView;
