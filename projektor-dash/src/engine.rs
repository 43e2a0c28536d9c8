use chrono::NaiveDate;
use projektor_api::domain::Project;

/// Criteria applied to the in-memory project collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub running_only: bool,
    /// Exact-match end date at calendar-day granularity; `None` disables
    /// the check.
    pub end_date: Option<NaiveDate>,
}

/// Keeps the records matching every applicable criterion, preserving their
/// relative order. A record whose end date does not parse is dropped no
/// matter what the criteria say: an unknown date never matches.
pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| {
            let Some(end_day) = project.end_date_day() else {
                return false;
            };

            if filter.running_only && !project.is_running {
                return false;
            }

            match filter.end_date {
                Some(wanted) => end_day == wanted,
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// The half-open row range `[page_index * page_size, page_index * page_size
/// + page_size)`, clipped to the slice bounds. A page past the end is empty,
/// not an error; that happens transiently when a filter shrinks the
/// collection under an old page index.
pub fn paginate<T>(rows: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}
