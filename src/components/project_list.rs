//! Project List View
//!
//! Card grid of saved projects, the add button and the add-project modal.

use leptos::prelude::*;

use crate::components::{AddProjectModal, ProjectCardView};
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn ProjectListView() -> impl IntoView {
    let ctx = use_app_context();

    let cards = Memo::new(move |_| ctx.store.app().with(|app| app.cards()));
    let form_open = Memo::new(move |_| ctx.store.app().with(|app| app.is_form_open()));

    view! {
        <div class="project-list">
            <header class="project-list-header">
                <h1>"Local Projects"</h1>
            </header>

            <Show
                when=move || !cards.with(|c| c.is_empty())
                fallback=|| view! {
                    <p class="empty-state">"No projects yet. Add one to get started!"</p>
                }
            >
                <div class="project-grid">
                    <For
                        each=move || cards.get()
                        // Status is part of the key so a card re-renders when it changes
                        key=|card| (card.project.name.clone(), card.control, card.status)
                        let:card
                    >
                        <ProjectCardView card=card />
                    </For>
                </div>
            </Show>

            <button
                class="fab-add"
                title="Add project"
                on:click=move |_| ctx.open_form()
            >
                "+"
            </button>

            <Show when=move || form_open.get()>
                <AddProjectModal />
            </Show>
        </div>
    }
}
