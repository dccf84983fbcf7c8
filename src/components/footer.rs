//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"실습 관리 시스템 • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
