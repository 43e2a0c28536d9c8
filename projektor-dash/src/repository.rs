use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use projektor_api::domain::{CreatedProject, Manager, NewProject, Project};
use projektor_api::{FetchError, ProjektorClient};

/// The backend surface the page flows consume. `ProjektorClient` talks to
/// the real API; [`DevRepository`] serves seeded in-memory data for offline
/// development and tests.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn all_projects(&self) -> Result<Vec<Project>, FetchError>;
    async fn project_detail(&self, project_id: &str) -> Result<Project, FetchError>;
    async fn all_managers(&self) -> Result<Vec<Manager>, FetchError>;
    async fn add_project(&self, new_project: &NewProject) -> Result<CreatedProject, FetchError>;
}

#[async_trait]
impl ProjectRepository for ProjektorClient {
    async fn all_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.fetch_all_projects().await
    }

    async fn project_detail(&self, project_id: &str) -> Result<Project, FetchError> {
        self.fetch_project_detail(project_id).await
    }

    async fn all_managers(&self) -> Result<Vec<Manager>, FetchError> {
        self.fetch_all_managers().await
    }

    async fn add_project(&self, new_project: &NewProject) -> Result<CreatedProject, FetchError> {
        ProjektorClient::add_project(self, new_project).await
    }
}

/// In-memory repository with seeded data.
#[derive(Debug, Clone)]
pub struct DevRepository {
    projects: Arc<Mutex<Vec<Project>>>,
    managers: Vec<Manager>,
    next_id: Arc<Mutex<u32>>,
}

impl Default for DevRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DevRepository {
    pub fn new() -> Self {
        Self::with_projects(seed_projects())
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        let next_id = projects.len() as u32 + 1;
        Self {
            projects: Arc::new(Mutex::new(projects)),
            managers: seed_managers(),
            next_id: Arc::new(Mutex::new(next_id)),
        }
    }

    fn manager_name(&self, manager_id: &str) -> String {
        self.managers
            .iter()
            .find(|m| m.id == manager_id)
            .map(|m| m.manager_name.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProjectRepository for DevRepository {
    async fn all_projects(&self) -> Result<Vec<Project>, FetchError> {
        Ok(self.projects.lock().expect("dev store lock poisoned").clone())
    }

    async fn project_detail(&self, project_id: &str) -> Result<Project, FetchError> {
        self.projects
            .lock()
            .expect("dev store lock poisoned")
            .iter()
            .find(|p| p.project_id == project_id)
            .cloned()
            .ok_or_else(|| FetchError::Response(format!("No project with id {}", project_id)))
    }

    async fn all_managers(&self) -> Result<Vec<Manager>, FetchError> {
        Ok(self.managers.clone())
    }

    async fn add_project(&self, new_project: &NewProject) -> Result<CreatedProject, FetchError> {
        let project_id = {
            let mut next_id = self.next_id.lock().expect("dev store lock poisoned");
            let id = format!("p-{}", *next_id);
            *next_id += 1;
            id
        };

        let project = Project {
            project_id: project_id.clone(),
            project_name: new_project.project_name.clone(),
            title: new_project.title.clone(),
            description: new_project.description.clone(),
            start_date: new_project.start_date.clone(),
            end_date: new_project.end_date.clone(),
            is_running: new_project.is_running,
            manager_name: self.manager_name(&new_project.manager_id),
            manager_id: Some(new_project.manager_id.clone()),
        };

        let project_name = project.project_name.clone();
        self.projects
            .lock()
            .expect("dev store lock poisoned")
            .push(project);

        Ok(CreatedProject {
            project_id,
            project_name: Some(project_name),
        })
    }
}

fn seed_managers() -> Vec<Manager> {
    vec![
        Manager {
            id: "m-1".to_string(),
            manager_name: "Dana Ortiz".to_string(),
        },
        Manager {
            id: "m-2".to_string(),
            manager_name: "Kim Larsen".to_string(),
        },
    ]
}

fn seed_projects() -> Vec<Project> {
    let seed = |id: &str, name: &str, start: &str, end: &str, running: bool, manager: &str| Project {
        project_id: id.to_string(),
        project_name: name.to_string(),
        title: format!("{} initiative", name),
        description: format!("{} work stream", name),
        start_date: start.to_string(),
        end_date: end.to_string(),
        is_running: running,
        manager_name: manager.to_string(),
        manager_id: None,
    };

    vec![
        seed("p-1", "Atlas", "2023-11-01", "2024-01-01", true, "Dana Ortiz"),
        seed("p-2", "Borealis", "2023-12-01", "2024-02-01", false, "Kim Larsen"),
        seed("p-3", "Cascade", "2024-01-15", "2024-03-01", true, "Dana Ortiz"),
        // End date never set; the engine is expected to drop this one.
        seed("p-4", "Dune", "2024-02-01", "TBD", true, "Kim Larsen"),
        seed("p-5", "Ember", "2024-03-01", "2024-06-01", true, "Dana Ortiz"),
    ]
}
