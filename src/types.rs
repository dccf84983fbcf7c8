//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Server request/response structures
//! - **Status Types** - Upload panel state
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Types
// =============================================================================

/// A task selectable as the upload target.
///
/// Returned by `GET /tasks`; the server may attach more fields, only
/// `id` and `title` matter here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-side identifier, used as the form `task_id`
    pub id: u64,
    /// Human-readable title shown in the dropdown
    pub title: String,
}

/// Success body of `POST /bulk-upload`.
///
/// The server expands the spreadsheet into submission records and reports
/// how many it created, how many rows it skipped, and any row-level errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadOutcome {
    /// Submissions created from the file
    pub created: u64,
    /// Rows skipped (duplicates, blanks)
    pub skipped: u64,
    /// Row-level error descriptions, in server order
    #[serde(default)]
    pub errors: Vec<String>,
}

impl UploadOutcome {
    /// Line summarizing created submissions, e.g. `생성된 제출물: 5건`.
    pub fn created_line(&self) -> String {
        format!("생성된 제출물: {}건", self.created)
    }

    /// Line summarizing skipped rows, e.g. `건너뛴 항목: 2건`.
    pub fn skipped_line(&self) -> String {
        format!("건너뛴 항목: {}건", self.skipped)
    }

    /// Warning line when the server reported row-level errors,
    /// `None` when the upload was clean.
    pub fn error_notice(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some(format!("⚠️ 일부 오류 발생 ({}건)", self.errors.len()))
        }
    }
}

/// Failure body of `POST /bulk-upload` (non-success HTTP status).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FailureBody {
    /// Server-supplied human-readable failure message
    pub detail: Option<String>,
}

/// Fallback shown when the server sends no `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "알 수 없는 오류가 발생했습니다";

impl FailureBody {
    /// The message to render, falling back to [`GENERIC_FAILURE_MESSAGE`].
    pub fn message(self) -> String {
        self.detail
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
    }
}

// =============================================================================
// Status Types
// =============================================================================

/// State of the upload status panel.
///
/// Held in a signal by the upload component; the view renders one panel
/// per variant. Server-reported failures and transport failures carry
/// different headings, matching the original page.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadStatus {
    /// No panel shown
    Hidden,
    /// Request in flight
    InProgress,
    /// Server accepted the file
    Success(UploadOutcome),
    /// Server rejected the file or the request failed
    Failed {
        /// `❌ 업로드 실패` (server) or `❌ 업로드 오류` (transport)
        heading: &'static str,
        /// Detail message, verbatim
        message: String,
    },
}

/// Heading for a server-reported failure.
pub const SERVER_FAILURE_HEADING: &str = "❌ 업로드 실패";

/// Heading for a transport or decoding failure.
pub const TRANSPORT_FAILURE_HEADING: &str = "❌ 업로드 오류";

impl UploadStatus {
    /// Map an [`AppError`] to the failure panel it should render.
    pub fn from_error(err: AppError) -> Self {
        match err {
            AppError::Server(message) => UploadStatus::Failed {
                heading: SERVER_FAILURE_HEADING,
                message,
            },
            AppError::Form(message) | AppError::Network(message) => UploadStatus::Failed {
                heading: TRANSPORT_FAILURE_HEADING,
                message,
            },
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for the service layer.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Building the multipart payload failed.
    Form(String),
    /// Non-success HTTP status; carries the server detail message
    /// (or the generic fallback).
    Server(String),
    /// Network/HTTP or JSON decoding error.
    Network(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Form(msg) => write!(f, "Form error: {}", msg),
            AppError::Server(msg) => write!(f, "Server error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_outcome_has_no_error_notice() {
        let outcome = UploadOutcome {
            created: 5,
            skipped: 2,
            errors: vec![],
        };
        assert_eq!(outcome.created_line(), "생성된 제출물: 5건");
        assert_eq!(outcome.skipped_line(), "건너뛴 항목: 2건");
        assert_eq!(outcome.error_notice(), None);
    }

    #[test]
    fn row_errors_produce_a_counted_notice() {
        let outcome = UploadOutcome {
            created: 3,
            skipped: 0,
            errors: vec!["row 4: missing name".into(), "row 7: bad prompt".into()],
        };
        assert_eq!(
            outcome.error_notice().as_deref(),
            Some("⚠️ 일부 오류 발생 (2건)")
        );
    }

    #[test]
    fn failure_body_uses_detail_verbatim() {
        let body: FailureBody = serde_json::from_str(r#"{"detail": "invalid file"}"#).unwrap();
        assert_eq!(body.message(), "invalid file");
    }

    #[test]
    fn failure_body_falls_back_when_detail_absent() {
        let body: FailureBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn server_and_transport_errors_render_distinct_headings() {
        let server = UploadStatus::from_error(AppError::Server("invalid file".into()));
        assert_eq!(
            server,
            UploadStatus::Failed {
                heading: SERVER_FAILURE_HEADING,
                message: "invalid file".into(),
            }
        );

        let transport = UploadStatus::from_error(AppError::Network("connection reset".into()));
        assert_eq!(
            transport,
            UploadStatus::Failed {
                heading: TRANSPORT_FAILURE_HEADING,
                message: "connection reset".into(),
            }
        );
    }
}
