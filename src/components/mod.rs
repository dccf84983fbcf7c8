//! UI components for the bulk upload page.
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`BulkUploadSection`] - Spreadsheet upload form with status panel
//! - [`TaskSelect`] - Task dropdown fed from `/tasks`

mod footer;
mod hero;
mod task_select;
mod upload;

pub use footer::*;
pub use hero::*;
pub use task_select::*;
pub use upload::*;
