//! Terminal View
//!
//! Live log panel for one project, fed by the `terminal_log` event.

use launcher_core::TerminalFeed;
use leptos::prelude::*;

use crate::commands::events::{self, subscribe_in_scope};
use crate::context::{use_app_context, view_scope};

#[component]
pub fn TerminalView(
    #[prop(into)] project: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let max_lines = ctx.config().terminal.max_lines;
    let feed = RwSignal::new(TerminalFeed::new(project.clone(), max_lines));

    subscribe_in_scope(
        view_scope(),
        events::subscribe_terminal_log(move |payload| {
            let mine = feed.try_with_untracked(|f| f.strip(&payload).is_some()).unwrap_or(false);
            if mine {
                feed.try_update(|f| f.accept(&payload));
            }
        }),
    );

    // Keyed by absolute line number so eviction does not shift keys
    let lines = move || {
        feed.with(|f| {
            let first = f.buffer().evicted();
            f.buffer()
                .iter()
                .enumerate()
                .map(|(i, line)| (first + i, line.to_string()))
                .collect::<Vec<_>>()
        })
    };
    let evicted = move || feed.with(|f| f.buffer().evicted());
    let is_empty = move || feed.with(|f| f.buffer().is_empty());

    view! {
        <div class="terminal-view">
            <header class="terminal-header">
                <button class="back-btn" on:click=move |_| on_close.run(())>"← Back"</button>
                <h2>{format!("Terminal: {}", project)}</h2>
            </header>
            <div class="terminal-output">
                <Show when=move || { evicted() > 0 }>
                    <p class="terminal-evicted">
                        {move || format!("... {} earlier lines dropped", evicted())}
                    </p>
                </Show>
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="terminal-empty">"No logs yet..."</p> }
                >
                    <For
                        each=lines
                        key=|(n, _)| *n
                        children=|(_, line)| view! { <p class="terminal-line">{line}</p> }
                    />
                </Show>
            </div>
        </div>
    }
}
