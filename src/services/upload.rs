//! Multipart upload of the selected spreadsheet.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::BULK_UPLOAD_URL;
use crate::types::{AppError, AppResult, FailureBody, UploadOutcome};

/// Submit one spreadsheet for the given task.
///
/// Builds a multipart body with `task_id` and `excel_file` (the browser
/// keeps the file's name on the part) and issues a single POST. No
/// retries, no timeout; the request runs until the transport resolves it.
///
/// A non-success HTTP status becomes [`AppError::Server`] carrying the
/// server's `detail` message (or the generic fallback). Transport and
/// JSON decoding failures become [`AppError::Network`].
pub async fn upload_workbook(task_id: &str, file: &File) -> AppResult<UploadOutcome> {
    let form = FormData::new()
        .map_err(|e| AppError::Form(format!("Failed to create FormData: {:?}", e)))?;

    form.append_with_str("task_id", task_id)
        .map_err(|e| AppError::Form(format!("Failed to append task_id: {:?}", e)))?;
    form.append_with_blob("excel_file", file)
        .map_err(|e| AppError::Form(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(BULK_UPLOAD_URL)
        .body(form)
        .map_err(|e| AppError::Form(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<UploadOutcome>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response: {}", e)))
    } else {
        // The failure body is JSON too; a body that does not decode is a
        // transport-level problem, same as in the original page.
        let body = response
            .json::<FailureBody>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response: {}", e)))?;
        Err(AppError::Server(body.message()))
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{FailureBody, UploadOutcome};

    #[test]
    fn success_body_deserializes() {
        let json = r#"{"created": 5, "skipped": 2, "errors": []}"#;
        let outcome: UploadOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.created, 5);
        assert_eq!(outcome.skipped, 2);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn errors_field_is_optional() {
        let json = r#"{"created": 1, "skipped": 0}"#;
        let outcome: UploadOutcome = serde_json::from_str(json).unwrap();
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn row_errors_arrive_in_order() {
        let json = r#"{"created": 0, "skipped": 1, "errors": ["2행: 이름 누락", "3행: 프롬프트 누락"]}"#;
        let outcome: UploadOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.errors, vec!["2행: 이름 누락", "3행: 프롬프트 누락"]);
    }

    #[test]
    fn failure_body_detail_is_optional() {
        let with: FailureBody = serde_json::from_str(r#"{"detail": "invalid file"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("invalid file"));

        let without: FailureBody = serde_json::from_str("{}").unwrap();
        assert!(without.detail.is_none());
    }
}
