//! Server communication.
//!
//! # Services
//!
//! - [`upload`] - multipart submission of the spreadsheet to `/bulk-upload`
//! - [`tasks`] - task list fetch from `/tasks`

pub mod tasks;
pub mod upload;

pub use tasks::*;
pub use upload::*;
