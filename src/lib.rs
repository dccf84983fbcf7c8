//! Bulk Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for registering practicum submissions in bulk
//! from an uploaded Excel file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── BulkUploadSection                                      │
//! │      ├── TaskSelect (fed from GET /tasks)                   │
//! │      ├── file input + submit button                         │
//! │      └── StatusPanel (progress / success / failure)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Task, UploadOutcome, UploadStatus, errors)
//! - [`components`] - UI components (Hero, BulkUploadSection, TaskSelect)
//! - [`services`] - Backend communication (upload, task list)
//! - [`refresh`] - Ordered post-upload refresh hooks

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod refresh;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    FailureBody, Task, UploadOutcome,
    // Status panel
    UploadStatus,
    // Errors
    AppError, AppResult,
};

// Refresh hooks
pub use refresh::RefreshRegistry;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Bulk Upload - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (tasks, set_tasks) = create_signal(Vec::<Task>::new());

    // Views that must reflect new submissions after an upload register
    // here; hooks run in this order, 500 ms after a successful upload.
    // The submissions/practitioners/dashboard views live in the host
    // page today, so the hooks only announce the refresh.
    let refresh = RefreshRegistry::new();
    refresh.register("submissions", || log::info!("refreshing submissions list"));
    refresh.register("practitioners", || log::info!("refreshing practitioners list"));
    refresh.register("dashboard", || log::info!("refreshing dashboard"));

    // Initial task load; failure leaves the dropdown on its placeholder.
    spawn_local(async move {
        match fetch_tasks().await {
            Ok(list) => {
                log::info!("loaded {} tasks", list.len());
                set_tasks.set(list);
            }
            Err(e) => log::error!("과제 목록 로드 실패: {}", e),
        }
    });

    view! {
        <div class="container">
            <Hero/>
            <BulkUploadSection tasks=tasks refresh=refresh/>
        </div>
        <Footer/>
    }
}
