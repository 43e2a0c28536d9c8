use serde::{Deserialize, Serialize};

/// Manager reference used to populate the manager selection control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: String,
    pub manager_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_manager_list() {
        let raw = r#"[
            { "id": "m-1", "managerName": "Dana Ortiz" },
            { "id": "m-2", "managerName": "Kim Larsen" }
        ]"#;

        let managers: Vec<Manager> = serde_json::from_str(raw).unwrap();
        assert_eq!(managers.len(), 2);
        assert_eq!(managers[1].manager_name, "Kim Larsen");
    }
}
