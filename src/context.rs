//! Application Context
//!
//! Store, controller and config provided via Leptos Context API. All
//! backend traffic from the views goes through here.

use launcher_core::{Command, CommandOutcome, Controller, LauncherConfig, Refresh, ScopeToken, StatusUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBackend;
use crate::store::{UiState, UiStateStoreFields, UiStore};

/// Token cancelled when the current reactive owner is cleaned up
pub fn view_scope() -> ScopeToken {
    let scope = ScopeToken::new();
    let on_drop = scope.clone();
    on_cleanup(move || on_drop.cancel());
    scope
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: UiStore,
    controller: Controller<TauriBackend>,
    config: StoredValue<LauncherConfig>,
    /// Scope of the root view; actions outlive the view that started them
    scope: StoredValue<ScopeToken>,
}

impl AppContext {
    pub fn new(store: UiStore, config: LauncherConfig, scope: ScopeToken) -> Self {
        Self {
            store,
            controller: Controller::new(TauriBackend),
            config: StoredValue::new(config),
            scope: StoredValue::new(scope),
        }
    }

    pub fn config(&self) -> LauncherConfig {
        self.config.get_value()
    }

    // ========================
    // Backend Actions
    // ========================

    /// Fetch state again without sending a command
    pub fn reload(&self, plan: Refresh) {
        let ctx = *self;
        let scope = self.scope.get_value();
        spawn_local(async move {
            let known = ctx.store.app().with_untracked(|app| app.projects().to_vec());
            if let Some(snapshot) = ctx.controller.reload(&scope, plan, &known).await {
                ctx.store.app().update(|app| app.apply_refresh(snapshot));
            }
        });
    }

    /// Run a command, then apply the state it invalidated
    pub fn dispatch(&self, command: Command) {
        let ctx = *self;
        let scope = self.scope.get_value();
        spawn_local(async move {
            let is_add = matches!(command, Command::AddProject(_));
            let known = ctx.store.app().with_untracked(|app| app.projects().to_vec());
            match ctx.controller.run(&scope, command, &known).await {
                CommandOutcome::Completed(snapshot) if is_add => {
                    ctx.store.update(|ui: &mut UiState| ui.app.project_added(&mut ui.form, snapshot));
                }
                CommandOutcome::Completed(snapshot) => {
                    ctx.store.app().update(|app| app.apply_refresh(snapshot));
                }
                // Already logged by the controller; the form stays as it is
                CommandOutcome::Rejected(_) | CommandOutcome::Failed(_) | CommandOutcome::Cancelled => {}
            }
        });
    }

    /// Submit the add-project draft
    pub fn submit_form(&self) {
        let candidate = self.store.form().with_untracked(|form| form.draft.clone());
        self.dispatch(Command::AddProject(candidate));
    }

    // ========================
    // Local State
    // ========================

    pub fn apply_status_update(&self, update: StatusUpdate) {
        self.store.app().update(|app| {
            app.apply_status_update(&update);
        });
    }

    pub fn open_form(&self) {
        self.store.app().update(|app| app.open_form());
    }

    /// Close the modal without submitting
    pub fn close_form(&self) {
        self.store.form().update(|form| form.dismiss());
        self.store.app().update(|app| app.close_form());
    }

    pub fn open_terminal(&self, name: String) {
        self.store.app().update(|app| app.open_terminal(name));
    }

    pub fn close_terminal(&self) {
        self.store.app().update(|app| app.close_terminal());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
