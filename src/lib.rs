//! Recipe Finder 核心库
//!
//! 与 UI 框架无关的部分：
//! - `api`: 菜谱目录客户端
//! - `storage`: 本地持久化
//! - `store`: 应用状态与归约器
//! - `controller`: 执行归约器产生的副作用

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_warn {
    ($($t:tt)*) => (eprintln!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod request;
pub mod storage;
pub mod store;

pub use api::RecipeApi;
pub use config::AppConfig;
pub use controller::Controller;
pub use error::{RecipeError, RecipeErrorStatus, RecipeResult};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use storage::{KeyValueStore, Persistence};
pub use store::{Action, AppState, Effect, Fetch, Persist, Screen, reduce};
