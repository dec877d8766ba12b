//! Application State
//!
//! The one state object behind the project list: cached projects and
//! statuses, which surface is shown, and whether the add form is open.
//! Queries are pure; commands only mutate this value.

use crate::config::LauncherConfig;
use crate::controller::RefreshSnapshot;
use crate::form::AddProjectForm;
use crate::models::{Project, ProjectStatus, StatusUpdate};
use crate::status::{self, CorrelationPolicy, StatusCell, StatusMap, StatusResolution};

/// Which surface is rendered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    List,
    /// Log panel of one project; at most one at a time
    Terminal(String),
}

/// The run button a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunControl {
    Start,
    Stop,
    /// Status could not be attributed; offer a status refetch instead
    Refresh,
}

/// Everything needed to render one project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub project: Project,
    /// `None` when the cached status is unknown
    pub status: Option<ProjectStatus>,
    pub control: RunControl,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    projects: Vec<Project>,
    statuses: StatusMap,
    view: ActiveView,
    form_open: bool,
    policy: CorrelationPolicy,
}

impl AppState {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            policy: config.status.correlation,
            ..Default::default()
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn status_of(&self, name: &str) -> Option<StatusCell> {
        self.statuses.get(name).copied()
    }

    pub fn active_view(&self) -> &ActiveView {
        &self.view
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// One card per project, in list order
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.projects
            .iter()
            .map(|project| {
                let status = match self.statuses.get(&project.name) {
                    Some(StatusCell::Known(status)) => Some(*status),
                    Some(StatusCell::Unknown) => None,
                    None => Some(ProjectStatus::stopped()),
                };
                let control = match status {
                    Some(s) if s.running => RunControl::Stop,
                    Some(_) => RunControl::Start,
                    None => RunControl::Refresh,
                };
                ProjectCard {
                    project: project.clone(),
                    status,
                    control,
                }
            })
            .collect()
    }

    // ========================
    // Commands
    // ========================

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn open_terminal(&mut self, name: impl Into<String>) {
        self.view = ActiveView::Terminal(name.into());
    }

    pub fn close_terminal(&mut self) {
        self.view = ActiveView::List;
    }

    /// Merge freshly fetched state
    ///
    /// A new project list replaces the old one and drops cached statuses of
    /// projects that are gone. Statuses missing from the snapshot keep
    /// their previous value.
    pub fn apply_refresh(&mut self, snapshot: RefreshSnapshot) {
        if let Some(projects) = snapshot.projects {
            self.statuses
                .retain(|name, _| projects.iter().any(|p| &p.name == name));
            self.projects = projects;
        }
        for (name, status) in snapshot.statuses {
            if self.project(&name).is_some() {
                self.statuses.insert(name, StatusCell::Known(status));
            }
        }
    }

    /// Successful add: blank form, modal closed, refreshed state
    pub fn project_added(&mut self, form: &mut AddProjectForm, snapshot: RefreshSnapshot) {
        form.reset();
        self.close_form();
        self.apply_refresh(snapshot);
    }

    /// Apply a pushed `project_status_update`
    pub fn apply_status_update(&mut self, update: &StatusUpdate) -> StatusResolution {
        let resolution = status::correlate(update, &self.projects, &self.statuses, self.policy);
        match &resolution {
            StatusResolution::Apply(name) => {
                log::debug!("Status update for {}: {:?}", name, update.status());
                self.statuses
                    .insert(name.clone(), StatusCell::Known(update.status()));
            }
            StatusResolution::Ambiguous(names) => {
                log::warn!("Status update {:?} matches {:?}; marking them unknown", update.status(), names);
                for name in names {
                    self.statuses.insert(name.clone(), StatusCell::Unknown);
                }
            }
            StatusResolution::Unmatched => {
                log::debug!("Status update {:?} matches no project", update.status());
            }
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{Call, MockBackend};
    use crate::controller::{Command, CommandOutcome, Controller, Refresh};
    use crate::models::RunScript;
    use crate::scope::ScopeToken;

    fn app1() -> Project {
        Project::new("app1", "/p1", "d", RunScript::Start)
    }

    fn config(policy: CorrelationPolicy) -> LauncherConfig {
        let mut config = LauncherConfig::default();
        config.status.correlation = policy;
        config
    }

    fn two_idle_projects(policy: CorrelationPolicy) -> AppState {
        let mut state = AppState::new(&config(policy));
        state.apply_refresh(RefreshSnapshot {
            projects: Some(vec![app1(), Project::new("app2", "/p2", "", RunScript::Dev)]),
            statuses: vec![
                ("app1".into(), ProjectStatus::stopped()),
                ("app2".into(), ProjectStatus::stopped()),
            ],
        });
        state
    }

    #[tokio::test]
    async fn test_single_idle_project_then_start() {
        let backend = MockBackend::with_projects(vec![app1()]);
        backend.set_status("app1", ProjectStatus::stopped());
        let controller = Controller::new(backend);
        let scope = ScopeToken::new();
        let mut state = AppState::default();

        let snapshot = controller.reload(&scope, Refresh::All, &[]).await.unwrap();
        state.apply_refresh(snapshot);

        let cards = state.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].control, RunControl::Start);
        assert_eq!(cards[0].status, Some(ProjectStatus::stopped()));

        controller.backend().clear_calls();
        let project = cards[0].project.clone();
        let outcome = controller
            .run(&scope, Command::StartProject(project), state.projects())
            .await;
        assert_eq!(
            controller.backend().calls(),
            vec![
                Call::StartProject {
                    name: "app1".into(),
                    path: "/p1".into(),
                    script: RunScript::Start,
                },
                Call::GetStatus("app1".into()),
            ]
        );

        let CommandOutcome::Completed(snapshot) = outcome else {
            panic!("start should complete");
        };
        state.apply_refresh(snapshot);
        assert_eq!(state.cards()[0].control, RunControl::Stop);
    }

    #[test]
    fn test_missing_status_renders_as_stopped() {
        let mut state = AppState::default();
        state.apply_refresh(RefreshSnapshot {
            projects: Some(vec![app1()]),
            statuses: vec![],
        });
        assert_eq!(state.status_of("app1"), None);
        assert_eq!(state.cards()[0].control, RunControl::Start);
    }

    #[test]
    fn test_first_match_updates_exactly_one() {
        let mut state = two_idle_projects(CorrelationPolicy::FirstMatch);

        let resolution = state.apply_status_update(&StatusUpdate::from(ProjectStatus::running(42)));

        assert_eq!(resolution, StatusResolution::Apply("app1".into()));
        assert_eq!(state.status_of("app1"), Some(StatusCell::Known(ProjectStatus::running(42))));
        assert_eq!(state.status_of("app2"), Some(StatusCell::Known(ProjectStatus::stopped())));
    }

    #[test]
    fn test_strict_marks_ambiguous_projects_unknown() {
        let mut state = two_idle_projects(CorrelationPolicy::Strict);

        state.apply_status_update(&StatusUpdate::from(ProjectStatus::running(42)));

        assert_eq!(state.status_of("app1"), Some(StatusCell::Unknown));
        assert_eq!(state.status_of("app2"), Some(StatusCell::Unknown));
        let controls: Vec<RunControl> = state.cards().iter().map(|c| c.control).collect();
        assert_eq!(controls, vec![RunControl::Refresh, RunControl::Refresh]);

        // A status refresh resolves the unknowns
        state.apply_refresh(RefreshSnapshot {
            projects: None,
            statuses: vec![
                ("app1".into(), ProjectStatus::running(42)),
                ("app2".into(), ProjectStatus::stopped()),
            ],
        });
        assert_eq!(state.cards()[0].control, RunControl::Stop);
        assert_eq!(state.cards()[1].control, RunControl::Start);
    }

    #[test]
    fn test_named_update_applies_directly() {
        let mut state = two_idle_projects(CorrelationPolicy::Strict);
        let update = StatusUpdate {
            running: true,
            pid: Some(42),
            name: Some("app2".into()),
        };
        state.apply_status_update(&update);
        assert_eq!(state.status_of("app2"), Some(StatusCell::Known(ProjectStatus::running(42))));
        assert_eq!(state.status_of("app1"), Some(StatusCell::Known(ProjectStatus::stopped())));
    }

    #[test]
    fn test_refresh_keeps_prior_status_on_failure_and_prunes_deleted() {
        let mut state = two_idle_projects(CorrelationPolicy::Strict);
        state.apply_refresh(RefreshSnapshot {
            projects: None,
            statuses: vec![("app2".into(), ProjectStatus::running(5))],
        });
        assert_eq!(state.status_of("app1"), Some(StatusCell::Known(ProjectStatus::stopped())));

        state.apply_refresh(RefreshSnapshot {
            projects: Some(vec![app1()]),
            statuses: vec![],
        });
        assert_eq!(state.projects().len(), 1);
        assert_eq!(state.status_of("app2"), None);
    }

    #[test]
    fn test_view_switching() {
        let mut state = AppState::default();
        assert_eq!(state.active_view(), &ActiveView::List);
        state.open_terminal("app1");
        state.open_terminal("app2");
        assert_eq!(state.active_view(), &ActiveView::Terminal("app2".into()));
        state.close_terminal();
        assert_eq!(state.active_view(), &ActiveView::List);
    }

    #[tokio::test]
    async fn test_add_flow_success_and_failure() {
        let controller = Controller::new(MockBackend::with_projects(vec![app1()]));
        let scope = ScopeToken::new();
        let mut state = AppState::default();
        let mut form = AddProjectForm::default();

        state.open_form();
        form.set_name("app1".to_string());
        form.set_path("/dup".to_string());
        let outcome = controller
            .run(&scope, Command::AddProject(form.draft.clone()), state.projects())
            .await;
        assert!(matches!(outcome, CommandOutcome::Failed(_)));
        // Failure: modal stays open with the draft intact
        assert!(state.is_form_open());
        assert_eq!(form.draft.path, "/dup");

        form.set_name("web".to_string());
        let outcome = controller
            .run(&scope, Command::AddProject(form.draft.clone()), state.projects())
            .await;
        let CommandOutcome::Completed(snapshot) = outcome else {
            panic!("add should complete");
        };
        state.project_added(&mut form, snapshot);

        assert!(!state.is_form_open());
        assert_eq!(form.draft, Project::draft(RunScript::Start));
        assert!(state.project("web").is_some());
    }
}
