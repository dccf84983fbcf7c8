//! Task list fetch.

use gloo_net::http::Request;

use crate::config::TASKS_URL;
use crate::types::{AppError, AppResult, Task};

/// Fetch the selectable tasks from `/tasks`.
///
/// Callers treat failure as non-fatal: the dropdown simply stays on its
/// placeholder when this errors.
pub async fn fetch_tasks() -> AppResult<Vec<Task>> {
    let response = Request::get(TASKS_URL)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Server(format!(
            "task list request failed with status {}",
            response.status()
        )));
    }

    response
        .json::<Vec<Task>>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse task list: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::Task;

    #[test]
    fn task_list_deserializes() {
        let json = r#"[{"id": 1, "title": "A"}, {"id": 7, "title": "주차별 과제"}]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[1].title, "주차별 과제");
    }

    #[test]
    fn extra_server_fields_are_ignored() {
        let json = r#"[{"id": 3, "title": "A", "due_date": "2025-11-01"}]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks[0], Task { id: 3, title: "A".into() });
    }
}
