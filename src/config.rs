//! Application configuration.
//!
//! Centralized constants for the bulk upload frontend. The page is served
//! from the same origin as the API, so endpoints are plain paths.

/// Bulk upload endpoint (multipart POST).
pub const BULK_UPLOAD_URL: &str = "/bulk-upload";

/// Task list endpoint (GET, JSON array).
pub const TASKS_URL: &str = "/tasks";

/// File extensions accepted for upload, matched case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

/// Delay before the post-upload refresh hooks run, in milliseconds.
pub const REFRESH_DELAY_MS: u32 = 500;

/// Call-to-action label of the submit button when idle.
pub const UPLOAD_BUTTON_LABEL: &str = "📤 일괄 업로드 실행";

/// Submit button label while a request is in flight.
pub const UPLOAD_BUTTON_BUSY_LABEL: &str = "업로드 중...";

/// Placeholder option shown before a task is chosen.
pub const TASK_PLACEHOLDER: &str = "과제를 선택하세요";
