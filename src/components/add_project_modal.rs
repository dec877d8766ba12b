//! Add Project Modal
//!
//! Controlled form over the draft in the store, with a native directory
//! picker and the script dropdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ScriptSelector;
use crate::context::{use_app_context, view_scope};
use crate::store::UiStateStoreFields;

#[component]
pub fn AddProjectModal() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.store.form();
    let scope = view_scope();

    let selecting = Memo::new(move |_| form.with(|f| f.is_selecting()));

    let pick_directory = move |_| {
        if form.try_update(|f| f.begin_pick()) != Some(true) {
            return;
        }
        let scope = scope.clone();
        spawn_local(async move {
            let result = commands::pick_directory().await;
            if scope.is_cancelled() {
                log::debug!("Modal closed while picking a directory, dropping result");
                return;
            }
            form.update(|f| {
                f.finish_pick(result);
            });
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form();
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| ctx.close_form()>
            <div
                class="modal-body"
                on:click=move |ev| {
                    ev.stop_propagation();
                    if form.with_untracked(|f| f.dropdown.is_open()) {
                        form.update(|f| f.dropdown.close());
                    }
                }
            >
                <h2>"Add Project"</h2>
                <form class="add-project-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || form.with(|f| f.draft.name.clone())
                        on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                    />
                    <div class="path-row">
                        <input
                            type="text"
                            placeholder="Path"
                            prop:value=move || form.with(|f| f.draft.path.clone())
                            on:input=move |ev| form.update(|f| f.set_path(event_target_value(&ev)))
                        />
                        <button
                            type="button"
                            class="picker-btn"
                            title="Choose directory"
                            disabled=move || selecting.get()
                            on:click=pick_directory
                        >
                            {move || if selecting.get() { "..." } else { "📁" }}
                        </button>
                    </div>
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.draft.desc.clone())
                        on:input=move |ev| form.update(|f| f.set_desc(event_target_value(&ev)))
                    />
                    <ScriptSelector
                        current=Signal::derive(move || form.with(|f| f.draft.script))
                        is_open=Signal::derive(move || form.with(|f| f.dropdown.is_open()))
                        on_toggle=Callback::new(move |_| form.update(|f| f.dropdown.toggle()))
                        on_select=Callback::new(move |script| form.update(|f| f.select_script(script)))
                    />
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| ctx.close_form()>
                            "Cancel"
                        </button>
                        <button type="submit" class="submit-btn">"Add"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
