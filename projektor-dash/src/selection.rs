use std::collections::HashSet;

/// Client-side row selection for the projects table, keyed by project id.
/// Purely presentation-local; the engine never sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSelection {
    selected: HashSet<String>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, project_id: impl Into<String>) {
        self.selected.insert(project_id.into());
    }

    pub fn deselect(&mut self, project_id: &str) {
        self.selected.remove(project_id);
    }

    /// Replaces the selection with the given row ids.
    pub fn select_all(&mut self, project_ids: impl IntoIterator<Item = String>) {
        self.selected = project_ids.into_iter().collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, project_id: &str) -> bool {
        self.selected.contains(project_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Some rows selected, but not the whole page (indeterminate checkbox).
    pub fn some_selected(&self, row_count: usize) -> bool {
        self.selected_count() > 0 && self.selected_count() < row_count
    }

    pub fn all_selected(&self, row_count: usize) -> bool {
        row_count > 0 && self.selected_count() == row_count
    }
}
