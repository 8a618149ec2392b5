use crate::state::use_app;
use leptos::prelude::*;
use recipe_finder::Action;

/// 深浅色切换按钮，文字描述的是切换后的主题
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let app = use_app();
    let is_dark = app.select(|s| s.theme.is_dark());

    view! {
        <button
            class="btn btn-sm md:btn-md rounded-full gap-2 shadow-sm"
            on:click=move |_| app.dispatch(Action::ToggleTheme)
        >
            {move || if is_dark.get() { "☀️ Light Mode" } else { "🌙 Dark Mode" }}
        </button>
    }
}
