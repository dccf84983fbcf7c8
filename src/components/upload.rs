//! Bulk upload form: task selection, file validation, submission.
//!
//! The submit button drives a single POST to `/bulk-upload`; outcome is
//! rendered in an in-page status panel. The button is the only
//! re-entrancy guard: it is disabled while a request is in flight and
//! restored on every exit path.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::{
    ACCEPTED_EXTENSIONS, REFRESH_DELAY_MS, UPLOAD_BUTTON_BUSY_LABEL, UPLOAD_BUTTON_LABEL,
};
use crate::refresh::RefreshRegistry;
use crate::services::upload_workbook;
use crate::types::{AppError, Task, UploadStatus};
use crate::components::TaskSelect;

/// Why a submission attempt was blocked before any request was sent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidationFailure {
    /// No task chosen in the dropdown.
    NoTask,
    /// No file chosen in the file input.
    NoFile,
    /// File name does not end in an accepted extension.
    BadExtension,
}

impl ValidationFailure {
    /// The blocking alert text for this failure.
    pub fn alert_text(self) -> &'static str {
        match self {
            ValidationFailure::NoTask => "⚠️ 과제를 선택해주세요",
            ValidationFailure::NoFile => "⚠️ 엑셀 파일을 선택해주세요",
            ValidationFailure::BadExtension => "⚠️ 엑셀 파일(.xlsx, .xls)만 업로드 가능합니다",
        }
    }
}

/// Extension check, case-insensitive.
pub fn has_accepted_extension(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

/// Pre-submission checks, in the order the user sees them.
///
/// Short-circuits on the first failure; a passing result means a request
/// may be built.
pub fn validate_selection(
    task_id: &str,
    file_name: Option<&str>,
) -> Result<(), ValidationFailure> {
    if task_id.is_empty() {
        return Err(ValidationFailure::NoTask);
    }
    let name = file_name.ok_or(ValidationFailure::NoFile)?;
    if !has_accepted_extension(name) {
        return Err(ValidationFailure::BadExtension);
    }
    Ok(())
}

/// Confirmation prompt naming the chosen file.
pub fn confirm_prompt(file_name: &str) -> String {
    format!(
        "📁 {}\n\n이 파일을 업로드하여 제출물을 일괄 등록하시겠습니까?",
        file_name
    )
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn BulkUploadSection(
    tasks: ReadSignal<Vec<Task>>,
    refresh: RefreshRegistry,
) -> impl IntoView {
    let (selected_task, set_selected_task) = create_signal(String::new());
    let (selected_file, set_selected_file) = create_signal(None::<web_sys::File>);
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (status, set_status) = create_signal(UploadStatus::Hidden);

    let file_input_ref: NodeRef<Input> = create_node_ref();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        set_selected_file.set(file);
    };

    let on_submit = move |_| {
        let task_id = selected_task.get_untracked();
        let file = selected_file.get_untracked();

        let file_name = file.as_ref().map(|f| f.name());
        if let Err(failure) = validate_selection(&task_id, file_name.as_deref()) {
            alert(failure.alert_text());
            return;
        }
        let Some(file) = file else {
            return;
        };

        // Declining the confirmation is a silent no-op, unlike the
        // alerting validation failures above.
        if !confirm(&confirm_prompt(&file.name())) {
            return;
        }

        let refresh = refresh.clone();
        spawn_local(async move {
            set_is_uploading.set(true);
            set_status.set(UploadStatus::InProgress);

            match upload_workbook(&task_id, &file).await {
                Ok(outcome) => {
                    if !outcome.errors.is_empty() {
                        log::error!("업로드 오류 상세: {:?}", outcome.errors);
                    }
                    set_status.set(UploadStatus::Success(outcome));

                    // Reset the file selection; the element keeps its own
                    // value, so the signal alone is not enough.
                    set_selected_file.set(None);
                    if let Some(input) = file_input_ref.get_untracked() {
                        input.set_value("");
                    }

                    spawn_local(async move {
                        TimeoutFuture::new(REFRESH_DELAY_MS).await;
                        refresh.run_all();
                    });
                }
                Err(err) => {
                    if !matches!(err, AppError::Server(_)) {
                        log::error!("업로드 오류: {}", err);
                    }
                    set_status.set(UploadStatus::from_error(err));
                }
            }

            // Converging cleanup: restores the button on every outcome.
            set_is_uploading.set(false);
        });
    };

    view! {
        <div class="bulk-upload-section">
            <h3>"📊 엑셀 일괄 업로드"</h3>
            <p class="bulk-upload-hint">
                "엑셀 파일 형식: " <strong>"1행(이름 | 프롬프트)"</strong> ", 2행부터 참가자 데이터"
            </p>

            <div class="form-group">
                <label>"과제 선택:"</label>
                <TaskSelect tasks=tasks set_selected_task=set_selected_task/>
            </div>

            <div class="form-group">
                <label>"엑셀 파일 업로드:"</label>
                <input
                    type="file"
                    id="bulk-excel-file"
                    accept=".xlsx,.xls"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
            </div>

            <button
                class="btn btn-primary"
                prop:disabled=move || is_uploading.get()
                style:opacity=move || if is_uploading.get() { "0.5" } else { "1" }
                on:click=on_submit
            >
                {move || if is_uploading.get() {
                    UPLOAD_BUTTON_BUSY_LABEL
                } else {
                    UPLOAD_BUTTON_LABEL
                }}
            </button>

            <StatusPanel status=status/>
        </div>
    }
}

/// Status panel under the form; one rendering per [`UploadStatus`] variant.
#[component]
fn StatusPanel(status: ReadSignal<UploadStatus>) -> impl IntoView {
    move || match status.get() {
        UploadStatus::Hidden => view! {}.into_view(),
        UploadStatus::InProgress => view! {
            <div class="upload-status in-progress">
                <strong>"⏳ 업로드 중..."</strong>
                <p>"잠시만 기다려주세요"</p>
            </div>
        }
        .into_view(),
        UploadStatus::Success(outcome) => view! {
            <div class="upload-status success">
                <strong>"✅ 일괄 업로드 완료!"</strong>
                <ul>
                    <li>{outcome.created_line()}</li>
                    <li>{outcome.skipped_line()}</li>
                </ul>
                {outcome
                    .error_notice()
                    .map(|notice| view! { <p class="upload-warning">{notice}</p> })}
            </div>
        }
        .into_view(),
        UploadStatus::Failed { heading, message } => view! {
            <div class="upload-status failure">
                <strong>{heading}</strong>
                <p>{message}</p>
            </div>
        }
        .into_view(),
    }
}
