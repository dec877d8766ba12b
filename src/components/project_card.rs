//! Project Card Component
//!
//! One project with its run control, terminal and delete buttons.

use launcher_core::{Command, ProjectCard, Refresh, RunControl};
use leptos::prelude::*;

use crate::context::use_app_context;

/// Status line under the project path
fn status_label(card: &ProjectCard) -> String {
    match card.status {
        Some(status) if status.running => match status.pid {
            Some(pid) => format!("Running (pid {})", pid),
            None => "Running".to_string(),
        },
        Some(_) => "Stopped".to_string(),
        None => "Status unknown".to_string(),
    }
}

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let ctx = use_app_context();

    let label = status_label(&card);
    let status_class = match card.control {
        RunControl::Stop => "project-status running",
        RunControl::Start => "project-status stopped",
        RunControl::Refresh => "project-status unknown",
    };
    let ProjectCard { project, control, .. } = card;
    let name = project.name.clone();
    let script = project.script;

    let run_button = match control {
        RunControl::Start => {
            let project = project.clone();
            view! {
                <button
                    class="card-btn start-btn"
                    title="Start"
                    on:click=move |_| ctx.dispatch(Command::StartProject(project.clone()))
                >
                    "▶"
                </button>
            }
            .into_any()
        }
        RunControl::Stop => {
            let name = name.clone();
            view! {
                <button
                    class="card-btn stop-btn"
                    title="Stop"
                    on:click=move |_| ctx.dispatch(Command::StopProject(name.clone()))
                >
                    "■"
                </button>
            }
            .into_any()
        }
        RunControl::Refresh => view! {
            <button
                class="card-btn refresh-btn"
                title="Refresh status"
                on:click=move |_| ctx.reload(Refresh::Statuses)
            >
                "↻"
            </button>
        }
        .into_any(),
    };

    let terminal_name = name.clone();
    let delete_name = name;
    let desc = project.desc;

    view! {
        <div class="project-card">
            <h2>{project.name}</h2>
            <p class="project-path">{project.path}</p>
            {(!desc.is_empty()).then(|| view! { <p class="project-desc">{desc}</p> })}
            <p class="project-script">"Script: " {script.as_str()}</p>
            <p class=status_class>{label}</p>
            <div class="card-actions">
                {run_button}
                <button
                    class="card-btn terminal-btn"
                    title="Terminal"
                    on:click=move |_| ctx.open_terminal(terminal_name.clone())
                >
                    ">_"
                </button>
                <button
                    class="card-btn delete-btn"
                    title="Delete"
                    on:click=move |_| ctx.dispatch(Command::DeleteProject(delete_name.clone()))
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
