//! Launcher Controller
//!
//! Runs user commands against the backend and fetches the state each
//! command invalidates. Results are returned as data; the caller applies
//! them to `AppState`.

use crate::backend::Backend;
use crate::error::{LaunchError, LaunchResult};
use crate::models::{Project, ProjectStatus};
use crate::scope::ScopeToken;

// ========================
// Commands & Refresh Policy
// ========================

/// A user action that goes through the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddProject(Project),
    StartProject(Project),
    StopProject(String),
    DeleteProject(String),
}

/// State to fetch again after a command succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Status of every known project
    Statuses,
    /// Project list, then the status of every listed project
    All,
}

impl Command {
    pub fn refresh(&self) -> Refresh {
        match self {
            Command::AddProject(_) | Command::DeleteProject(_) => Refresh::All,
            Command::StartProject(_) | Command::StopProject(_) => Refresh::Statuses,
        }
    }

    /// Backend command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddProject(_) => "add_project",
            Command::StartProject(_) => "start_project",
            Command::StopProject(_) => "stop_project",
            Command::DeleteProject(_) => "delete_project",
        }
    }

    pub fn project_name(&self) -> &str {
        match self {
            Command::AddProject(p) | Command::StartProject(p) => &p.name,
            Command::StopProject(name) | Command::DeleteProject(name) => name,
        }
    }

    /// Checks done before anything is sent
    pub fn validate(&self) -> LaunchResult<()> {
        match self {
            Command::AddProject(project) if !project.has_name() => {
                Err(LaunchError::InvalidInput("project name is empty".to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Freshly fetched state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSnapshot {
    /// `None` when the list was not part of the refresh
    pub projects: Option<Vec<Project>>,
    /// Statuses fetched successfully, in project order
    pub statuses: Vec<(String, ProjectStatus)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed(RefreshSnapshot),
    /// Refused before reaching the backend
    Rejected(LaunchError),
    Failed(LaunchError),
    /// The owning view went away; nothing should be applied
    Cancelled,
}

// ========================
// Controller
// ========================

#[derive(Debug, Clone, Copy, Default)]
pub struct Controller<B> {
    backend: B,
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Project list, empty if the backend call fails
    pub async fn load_projects(&self) -> Vec<Project> {
        match self.backend.get_projects().await {
            Ok(projects) => {
                log::debug!("Fetched {} projects", projects.len());
                projects
            }
            Err(e) => {
                log::error!("Failed to fetch projects: {}", e);
                Vec::new()
            }
        }
    }

    /// One status request per project; failures are logged and skipped
    pub async fn load_statuses(&self, projects: &[Project]) -> Vec<(String, ProjectStatus)> {
        let mut statuses = Vec::with_capacity(projects.len());
        for project in projects {
            match self.backend.get_project_status(&project.name).await {
                Ok(status) => statuses.push((project.name.clone(), status)),
                Err(e) => log::warn!("Failed to fetch status for {}: {}", project.name, e),
            }
        }
        statuses
    }

    pub async fn refresh(&self, plan: Refresh, known: &[Project]) -> RefreshSnapshot {
        match plan {
            Refresh::Statuses => RefreshSnapshot {
                projects: None,
                statuses: self.load_statuses(known).await,
            },
            Refresh::All => {
                let projects = self.load_projects().await;
                let statuses = self.load_statuses(&projects).await;
                RefreshSnapshot {
                    projects: Some(projects),
                    statuses,
                }
            }
        }
    }

    /// Refresh unless `scope` is cancelled before it completes
    pub async fn reload(&self, scope: &ScopeToken, plan: Refresh, known: &[Project]) -> Option<RefreshSnapshot> {
        if scope.is_cancelled() {
            return None;
        }
        let snapshot = self.refresh(plan, known).await;
        if scope.is_cancelled() {
            log::debug!("Dropping refresh result, view is gone");
            return None;
        }
        Some(snapshot)
    }

    /// Send a single command to the backend; `run` has validated it
    async fn execute(&self, command: &Command) -> LaunchResult<()> {
        match command {
            Command::AddProject(project) => self.backend.add_project(project).await,
            Command::StartProject(project) => {
                self.backend
                    .start_project(&project.name, &project.path, project.script)
                    .await
            }
            Command::StopProject(name) => self.backend.stop_project(name).await,
            Command::DeleteProject(name) => self.backend.delete_project(name).await,
        }
    }

    /// Execute `command`, then fetch what it invalidated
    ///
    /// `known` is the project list the caller currently shows; it is used
    /// for status-only refreshes.
    pub async fn run(&self, scope: &ScopeToken, command: Command, known: &[Project]) -> CommandOutcome {
        if let Err(e) = command.validate() {
            log::debug!("Rejected {}: {}", command.name(), e);
            return CommandOutcome::Rejected(e);
        }

        if scope.is_cancelled() {
            return CommandOutcome::Cancelled;
        }

        log::info!("{} {}", command.name(), command.project_name());
        if let Err(e) = self.execute(&command).await {
            log::error!("Failed to {} {}: {}", command.name(), command.project_name(), e);
            return CommandOutcome::Failed(e);
        }

        match self.reload(scope, command.refresh(), known).await {
            Some(snapshot) => CommandOutcome::Completed(snapshot),
            None => CommandOutcome::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{Call, MockBackend};
    use crate::models::RunScript;

    fn app1() -> Project {
        Project::new("app1", "/p1", "d", RunScript::Start)
    }

    #[test]
    fn test_refresh_policy() {
        assert_eq!(Command::AddProject(app1()).refresh(), Refresh::All);
        assert_eq!(Command::DeleteProject("app1".into()).refresh(), Refresh::All);
        assert_eq!(Command::StartProject(app1()).refresh(), Refresh::Statuses);
        assert_eq!(Command::StopProject("app1".into()).refresh(), Refresh::Statuses);
    }

    #[tokio::test]
    async fn test_add_issues_one_add_then_one_refresh_cycle() {
        let controller = Controller::new(MockBackend::with_projects(vec![app1()]));
        let scope = ScopeToken::new();
        let candidate = Project::new("web", "/w", "", RunScript::Dev);

        let outcome = controller
            .run(&scope, Command::AddProject(candidate.clone()), &[app1()])
            .await;

        assert_eq!(
            controller.backend().calls(),
            vec![
                Call::AddProject(candidate.clone()),
                Call::GetProjects,
                Call::GetStatus("app1".into()),
                Call::GetStatus("web".into()),
            ]
        );
        match outcome {
            CommandOutcome::Completed(snapshot) => {
                assert_eq!(snapshot.projects, Some(vec![app1(), candidate]));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_name_sends_nothing() {
        let controller = Controller::new(MockBackend::with_projects(vec![]));
        let scope = ScopeToken::new();

        for name in ["", "   ", "\t\n"] {
            let candidate = Project::new(name, "/x", "", RunScript::Start);
            let outcome = controller.run(&scope, Command::AddProject(candidate), &[]).await;
            assert!(matches!(outcome, CommandOutcome::Rejected(LaunchError::InvalidInput(_))));
        }
        assert!(controller.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_start_sends_exact_parameters_then_refetches_status() {
        let controller = Controller::new(MockBackend::with_projects(vec![app1()]));
        let scope = ScopeToken::new();

        let outcome = controller.run(&scope, Command::StartProject(app1()), &[app1()]).await;

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
        let expected = RefreshSnapshot {
            projects: None,
            statuses: vec![("app1".into(), ProjectStatus::running(1000))],
        };
        assert_eq!(outcome, CommandOutcome::Completed(expected));
    }

    #[tokio::test]
    async fn test_failed_command_skips_refresh() {
        let backend = MockBackend::with_projects(vec![app1()]);
        backend.fail("add_project");
        let controller = Controller::new(backend);
        let scope = ScopeToken::new();

        let outcome = controller
            .run(&scope, Command::AddProject(Project::new("x", "/x", "", RunScript::Start)), &[app1()])
            .await;

        assert!(matches!(outcome, CommandOutcome::Failed(LaunchError::Invoke { command: "add_project", .. })));
        assert_eq!(controller.backend().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_stop_when_not_running_fails() {
        let controller = Controller::new(MockBackend::with_projects(vec![app1()]));
        let outcome = controller
            .run(&ScopeToken::new(), Command::StopProject("app1".into()), &[app1()])
            .await;
        assert!(matches!(outcome, CommandOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_list_failure_falls_back_to_empty() {
        let backend = MockBackend::with_projects(vec![app1()]);
        backend.fail("get_projects");
        let controller = Controller::new(backend);

        let snapshot = controller.refresh(Refresh::All, &[]).await;
        assert_eq!(snapshot.projects, Some(vec![]));
        assert!(snapshot.statuses.is_empty());
    }

    #[tokio::test]
    async fn test_status_failures_are_skipped_per_project() {
        let second = Project::new("app2", "/p2", "", RunScript::Build);
        let backend = MockBackend::with_projects(vec![app1(), second.clone()]);
        backend.set_status("app1", ProjectStatus::running(9));
        backend.set_status("app2", ProjectStatus::stopped());
        backend.fail_status_of("app1");
        let controller = Controller::new(backend);

        let statuses = controller.load_statuses(&[app1(), second]).await;
        assert_eq!(statuses, vec![("app2".to_string(), ProjectStatus::stopped())]);
    }

    #[tokio::test]
    async fn test_cancelled_scope_sends_nothing() {
        let controller = Controller::new(MockBackend::with_projects(vec![app1()]));
        let scope = ScopeToken::new();
        scope.cancel();

        let outcome = controller.run(&scope, Command::DeleteProject("app1".into()), &[app1()]).await;

        assert_eq!(outcome, CommandOutcome::Cancelled);
        assert!(controller.backend().calls().is_empty());
        assert!(controller.reload(&scope, Refresh::All, &[]).await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_while_in_flight_discards_refresh() {
        let controller = Controller::new(MockBackend::with_projects(vec![app1()]));
        let scope = ScopeToken::new();
        controller.backend().cancel_during("delete_project", scope.clone());

        let outcome = controller.run(&scope, Command::DeleteProject("app1".into()), &[app1()]).await;

        assert_eq!(outcome, CommandOutcome::Cancelled);
        // The command had already been sent; only the refresh is skipped
        assert_eq!(controller.backend().calls(), vec![Call::DeleteProject("app1".into())]);
    }
}
