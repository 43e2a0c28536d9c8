use chrono::NaiveDate;
use projektor_api::domain::{Manager, NewProject, Project};

use crate::engine::{filter_projects, paginate, ProjectFilter};

pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Everything the projects page holds between renders, as one explicit
/// state record. The presentation layer keeps exactly one of these and
/// feeds every UI event through [`PageState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub projects: Vec<Project>,
    pub managers: Vec<Manager>,
    pub loading: bool,
    /// Page-level error message; when set, the list view is replaced.
    pub error: Option<String>,
    pub page_index: usize,
    pub rows_per_page: usize,
    pub show_running_only: bool,
    pub end_date_filter: Option<NaiveDate>,
    pub modal_open: bool,
    pub form: ProjectForm,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            managers: Vec::new(),
            loading: true,
            error: None,
            page_index: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            show_running_only: false,
            end_date_filter: None,
            modal_open: false,
            form: ProjectForm::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ProjectsLoaded(Vec<Project>),
    ManagersLoaded(Vec<Manager>),
    LoadFailed(String),
    PageChanged(usize),
    RowsPerPageChanged(usize),
    RunningToggled,
    EndDateFilterChanged(Option<NaiveDate>),
    ModalOpened,
    ModalClosed,
    FormChanged(ProjectForm),
    /// Creation accepted; carries the freshly re-fetched collection.
    /// Closes the modal and resets the form.
    ProjectAdded(Vec<Project>),
    /// Creation failed; collection and modal stay as they were.
    AddFailed(String),
}

impl PageState {
    /// Pure transition function. Filter changes deliberately leave
    /// `page_index` alone: a page index past the shrunken collection is a
    /// normal transient, and [`paginate`] renders it as an empty page.
    pub fn apply(mut self, event: PageEvent) -> PageState {
        match event {
            PageEvent::ProjectsLoaded(projects) => {
                self.projects = projects;
                self.loading = false;
            }
            PageEvent::ManagersLoaded(managers) => {
                self.managers = managers;
            }
            PageEvent::LoadFailed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            PageEvent::PageChanged(page_index) => {
                self.page_index = page_index;
            }
            PageEvent::RowsPerPageChanged(rows_per_page) => {
                if rows_per_page > 0 {
                    self.rows_per_page = rows_per_page;
                }
            }
            PageEvent::RunningToggled => {
                self.show_running_only = !self.show_running_only;
            }
            PageEvent::EndDateFilterChanged(end_date) => {
                self.end_date_filter = end_date;
            }
            PageEvent::ModalOpened => {
                self.modal_open = true;
            }
            PageEvent::ModalClosed => {
                self.modal_open = false;
            }
            PageEvent::FormChanged(form) => {
                self.form = form;
            }
            PageEvent::ProjectAdded(projects) => {
                self.projects = projects;
                self.modal_open = false;
                self.form = ProjectForm::default();
            }
            PageEvent::AddFailed(message) => {
                self.error = Some(message);
            }
        }
        self
    }

    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter {
            running_only: self.show_running_only,
            end_date: self.end_date_filter,
        }
    }

    /// Derives the view the presentation layer renders. Recomputed
    /// synchronously from the held collection; never touches the network.
    pub fn visible(&self) -> PageView {
        let filtered = filter_projects(&self.projects, &self.filter());
        let rows = paginate(&filtered, self.page_index, self.rows_per_page).to_vec();

        PageView {
            total: filtered.len(),
            rows,
            page_index: self.page_index,
            rows_per_page: self.rows_per_page,
        }
    }
}

/// The paginated slice plus the count the pagination controls display.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<Project>,
    pub total: usize,
    pub page_index: usize,
    pub rows_per_page: usize,
}

/// The create-project modal form. Fields are string-backed the way the form
/// controls hold them; real validation is the backend's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub project_name: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub is_running: bool,
    pub manager_id: String,
}

impl ProjectForm {
    /// Mirrors the required markers on the form controls.
    pub fn is_complete(&self) -> bool {
        !(self.project_name.trim().is_empty()
            || self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.start_date.trim().is_empty()
            || self.end_date.trim().is_empty()
            || self.manager_id.trim().is_empty())
    }

    pub fn to_new_project(&self) -> NewProject {
        NewProject {
            project_name: self.project_name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            is_running: self.is_running,
            manager_id: self.manager_id.clone(),
        }
    }
}
