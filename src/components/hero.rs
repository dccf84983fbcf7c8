//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"제출물 관리"</h1>
            <p class="subtitle">
                "엑셀 파일 하나로 참가자 제출물을 일괄 등록합니다. "
                "과제를 선택하고 .xlsx 또는 .xls 파일을 업로드하세요."
            </p>
        </div>
    }
}
