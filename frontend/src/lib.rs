//! Recipe Finder 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `state`: 全局状态上下文，所有变更都经由核心库的 `reduce`
//! - `web`: 浏览器原生 API 封装（fetch、localStorage、定时器、文档根元素）
//! - `components`: UI 组件层，只读取状态并派发动作

mod components {
    mod favorites;
    mod icons;
    pub mod login;
    pub mod main_page;
    mod recipe_grid;
    mod recipe_modal;
    mod search;
    pub mod splash;
    mod theme_toggle;
}
mod state;
mod web;

use crate::components::login::LoginPage;
use crate::components::main_page::MainPage;
use crate::components::splash::SplashScreen;
use crate::state::AppContext;
use crate::web::{Timeout, apply_theme};

use leptos::prelude::*;
use recipe_finder::{Action, AppConfig, Screen};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();

    // 1. 创建应用上下文（从 LocalStorage 恢复主题、会话、历史和收藏）
    let app = AppContext::new(&config);
    provide_context(app);

    // 2. 挂载时加载分类列表
    app.dispatch(Action::Mounted);

    // 3. 启动画面计时；定时器随组件一起释放
    let splash = Timeout::new(config.splash_delay_ms, move || {
        web_sys::console::log_1(&"[App] Splash finished.".into());
        app.dispatch(Action::SplashElapsed);
    });
    if splash.is_none() {
        app.dispatch(Action::SplashElapsed);
    }
    let _splash = StoredValue::new_local(splash);

    // 4. 主题同步到 <html>
    let theme = app.select(|s| s.theme);
    Effect::new(move |_| apply_theme(theme.get()));

    let screen = app.select(|s| s.screen);

    view! {
        {move || match screen.get() {
            Screen::Splash => view! { <SplashScreen /> }.into_any(),
            Screen::Login => view! { <LoginPage /> }.into_any(),
            Screen::Main => view! { <MainPage /> }.into_any(),
        }}
    }
}
