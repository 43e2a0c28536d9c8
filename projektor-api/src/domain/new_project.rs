use serde::{Deserialize, Serialize};

/// Creation payload for `POST /projects/add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub project_name: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub is_running: bool,
    pub manager_id: String,
}

/// Confirmation payload from `/projects/add`. The id is server-assigned,
/// which is why callers re-fetch the full list instead of appending locally.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProject {
    pub project_id: String,
    #[serde(default)]
    pub project_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_payload() {
        let payload = NewProject {
            project_name: "Atlas".to_string(),
            title: "Atlas rollout".to_string(),
            description: "Internal rollout".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-06-01".to_string(),
            is_running: true,
            manager_id: "m-1".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["projectName"], "Atlas");
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["isRunning"], true);
        assert_eq!(json["managerId"], "m-1");
    }

    #[test]
    fn created_project_tolerates_extra_fields() {
        let raw = r#"{ "projectId": "p-9", "status": "created" }"#;
        let created: CreatedProject = serde_json::from_str(raw).unwrap();
        assert_eq!(created.project_id, "p-9");
        assert_eq!(created.project_name, None);
    }
}
