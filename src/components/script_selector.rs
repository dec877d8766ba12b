//! Script Selector Component
//!
//! Custom dropdown over the run scripts of the add-project form.

use launcher_core::RunScript;
use leptos::prelude::*;

/// Dropdown bound to the form's script and open state
#[component]
pub fn ScriptSelector(
    #[prop(into)] current: Signal<RunScript>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_select: Callback<RunScript>,
) -> impl IntoView {
    view! {
        <div class="script-selector">
            <button
                type="button"
                class=move || if is_open.get() { "script-toggle open" } else { "script-toggle" }
                on:click=move |ev| {
                    // The modal body closes the dropdown on click
                    ev.stop_propagation();
                    on_toggle.run(());
                }
            >
                {move || current.get().label()}
                <span class="script-caret">"▾"</span>
            </button>
            <Show when=move || is_open.get()>
                <ul class="script-options">
                    {RunScript::ALL.iter().map(|script| {
                        let script = *script;
                        let is_selected = move || current.get() == script;
                        view! {
                            <li
                                class=move || if is_selected() { "script-option active" } else { "script-option" }
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_select.run(script);
                                }
                            >
                                {script.label()}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
