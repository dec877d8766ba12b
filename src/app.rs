//! Project Launcher Frontend App
//!
//! Root controller: owns the store, loads projects on mount, keeps the
//! status subscription alive and swaps between list and terminal.

use launcher_core::{ActiveView, LauncherConfig, Refresh};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::events::{self, subscribe_in_scope};
use crate::components::{ProjectListView, TerminalView};
use crate::context::{view_scope, AppContext};
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App(config: LauncherConfig) -> impl IntoView {
    let store = Store::new(UiState::new(&config));
    let scope = view_scope();

    let ctx = AppContext::new(store, config, scope.clone());
    provide_context(ctx);

    // Initial load
    ctx.reload(Refresh::All);

    // Pushed status changes
    subscribe_in_scope(
        scope,
        events::subscribe_status_updates(move |update| ctx.apply_status_update(update)),
    );

    // Status updates must not rebuild the terminal
    let active_view = Memo::new(move |_| store.app().with(|app| app.active_view().clone()));

    view! {
        <div class="app-layout">
            {move || match active_view.get() {
                ActiveView::List => view! { <ProjectListView /> }.into_any(),
                ActiveView::Terminal(name) => view! {
                    <TerminalView
                        project=name
                        on_close=Callback::new(move |_| ctx.close_terminal())
                    />
                }.into_any(),
            }}
        </div>
    }
}
