use tracing::{debug, error};

use crate::repository::ProjectRepository;
use crate::state::{PageEvent, PageState};

/// User-visible messages; transport details never leak past the log line.
pub const FETCH_PROJECTS_ERROR: &str = "Failed to fetch projects";
pub const FETCH_MANAGERS_ERROR: &str = "An unknown error occurred while fetching managers";
pub const ADD_PROJECT_ERROR: &str = "An error occurred while adding the project";

/// Initial page load: projects and managers are fetched concurrently, with
/// no ordering dependency, and land in disjoint parts of the state. Either
/// failure collapses to a page-level error message.
pub async fn load_page<R: ProjectRepository>(repo: &R) -> PageState {
    let state = PageState::default();

    let (projects, managers) = tokio::join!(repo.all_projects(), repo.all_managers());

    let state = match projects {
        Ok(projects) => {
            debug!(count = projects.len(), "projects loaded");
            state.apply(PageEvent::ProjectsLoaded(projects))
        }
        Err(e) => {
            error!(error = %e, "project fetch failed");
            state.apply(PageEvent::LoadFailed(FETCH_PROJECTS_ERROR.to_string()))
        }
    };

    match managers {
        Ok(managers) => state.apply(PageEvent::ManagersLoaded(managers)),
        Err(e) => {
            error!(error = %e, "manager fetch failed");
            state.apply(PageEvent::LoadFailed(FETCH_MANAGERS_ERROR.to_string()))
        }
    }
}

/// Full re-fetch of the collection, e.g. after an explicit refresh.
pub async fn refresh_projects<R: ProjectRepository>(repo: &R, state: PageState) -> PageState {
    match repo.all_projects().await {
        Ok(projects) => state.apply(PageEvent::ProjectsLoaded(projects)),
        Err(e) => {
            error!(error = %e, "project refresh failed");
            state.apply(PageEvent::LoadFailed(FETCH_PROJECTS_ERROR.to_string()))
        }
    }
}

/// Submits the create-project form. On acceptance the collection is
/// re-fetched in full so the list carries the server-assigned fields; the
/// one extra round trip is deliberate. On any failure the modal stays open
/// and the collection is untouched.
pub async fn submit_new_project<R: ProjectRepository>(repo: &R, state: PageState) -> PageState {
    if !state.form.is_complete() {
        return state.apply(PageEvent::AddFailed(ADD_PROJECT_ERROR.to_string()));
    }

    let payload = state.form.to_new_project();

    match repo.add_project(&payload).await {
        Ok(created) => {
            debug!(project_id = %created.project_id, "project created");
            match repo.all_projects().await {
                Ok(projects) => state.apply(PageEvent::ProjectAdded(projects)),
                Err(e) => {
                    error!(error = %e, "refresh after creation failed");
                    state.apply(PageEvent::AddFailed(ADD_PROJECT_ERROR.to_string()))
                }
            }
        }
        Err(e) => {
            error!(error = %e, "project creation failed");
            state.apply(PageEvent::AddFailed(ADD_PROJECT_ERROR.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DevRepository;
    use crate::state::{PageEvent, ProjectForm};
    use async_trait::async_trait;
    use projektor_api::domain::{CreatedProject, Manager, NewProject, Project};
    use projektor_api::FetchError;

    /// Repository whose every call fails, for the error paths.
    struct BrokenRepository;

    #[async_trait]
    impl crate::repository::ProjectRepository for BrokenRepository {
        async fn all_projects(&self) -> Result<Vec<Project>, FetchError> {
            Err(FetchError::Response("connection refused".to_string()))
        }

        async fn project_detail(&self, _project_id: &str) -> Result<Project, FetchError> {
            Err(FetchError::Response("connection refused".to_string()))
        }

        async fn all_managers(&self) -> Result<Vec<Manager>, FetchError> {
            Err(FetchError::Response("connection refused".to_string()))
        }

        async fn add_project(
            &self,
            _new_project: &NewProject,
        ) -> Result<CreatedProject, FetchError> {
            Err(FetchError::Unauthorized)
        }
    }

    fn complete_form() -> ProjectForm {
        ProjectForm {
            project_name: "Fjord".to_string(),
            title: "Fjord initiative".to_string(),
            description: "New work stream".to_string(),
            start_date: "2024-05-01".to_string(),
            end_date: "2024-12-01".to_string(),
            is_running: true,
            manager_id: "m-1".to_string(),
        }
    }

    #[tokio::test]
    async fn load_fills_projects_and_managers() {
        let repo = DevRepository::new();
        let state = load_page(&repo).await;

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.projects.len(), 5);
        assert_eq!(state.managers.len(), 2);
    }

    #[tokio::test]
    async fn load_failure_collapses_to_generic_message() {
        let state = load_page(&BrokenRepository).await;

        assert!(!state.loading);
        assert!(state.projects.is_empty());
        // Managers fail after projects, so their message wins the cell.
        assert_eq!(state.error.as_deref(), Some(FETCH_MANAGERS_ERROR));
    }

    #[tokio::test]
    async fn successful_submit_refreshes_and_closes_modal() {
        let repo = DevRepository::new();
        let state = load_page(&repo).await;
        let before = state.projects.len();

        let state = state
            .apply(PageEvent::ModalOpened)
            .apply(PageEvent::FormChanged(complete_form()));
        let state = submit_new_project(&repo, state).await;

        assert!(!state.modal_open);
        assert_eq!(state.form, ProjectForm::default());
        assert_eq!(state.projects.len(), before + 1);
        // The new row carries the server-assigned id, not a local append.
        assert!(state.projects.iter().any(|p| p.project_id == "p-6"));
    }

    #[tokio::test]
    async fn failed_submit_keeps_modal_open() {
        let repo = DevRepository::new();
        let loaded = load_page(&repo).await;
        let before = loaded.projects.clone();

        let state = loaded
            .apply(PageEvent::ModalOpened)
            .apply(PageEvent::FormChanged(complete_form()));
        let state = submit_new_project(&BrokenRepository, state).await;

        assert!(state.modal_open);
        assert_eq!(state.projects, before);
        assert_eq!(state.error.as_deref(), Some(ADD_PROJECT_ERROR));
        assert_eq!(state.form, complete_form());
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected_without_a_request() {
        let repo = DevRepository::new();
        let state = load_page(&repo).await;
        let before = state.projects.len();

        let state = state.apply(PageEvent::ModalOpened);
        let state = submit_new_project(&repo, state).await;

        assert!(state.modal_open);
        assert_eq!(state.projects.len(), before);
        assert_eq!(state.error.as_deref(), Some(ADD_PROJECT_ERROR));
    }

    #[tokio::test]
    async fn refresh_replaces_collection() {
        let repo = DevRepository::new();
        let state = load_page(&repo).await;

        repo.add_project(&NewProject {
            project_name: "Glacier".to_string(),
            title: "Glacier initiative".to_string(),
            description: "Work stream".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-12-31".to_string(),
            is_running: false,
            manager_id: "m-2".to_string(),
        })
        .await
        .unwrap();

        let state = refresh_projects(&repo, state).await;
        assert_eq!(state.projects.len(), 6);
    }

    #[tokio::test]
    async fn refresh_failure_sets_page_error() {
        let repo = DevRepository::new();
        let state = load_page(&repo).await;

        let state = refresh_projects(&BrokenRepository, state).await;
        assert_eq!(state.error.as_deref(), Some(FETCH_PROJECTS_ERROR));
    }

    #[tokio::test]
    async fn loaded_page_filters_out_seeded_bad_date() {
        // The seed contains one project with an unset end date; the visible
        // view must never show it.
        let repo = DevRepository::new();
        let state = load_page(&repo).await;

        let view = state.visible();
        assert_eq!(view.total, 4);
        assert!(view.rows.iter().all(|p| p.project_name != "Dune"));
    }
}
