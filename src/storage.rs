//! 本地持久化适配器
//!
//! 四个互相独立的键，各自有默认值。读取失败（缺失、空值、格式错误）
//! 一律返回默认值并记录日志，绝不向上传播。

use crate::error::{RecipeError, RecipeResult};
use recipe_shared::{
    Favorites, KEY_FAVORITES, KEY_LOGGED_IN, KEY_SEARCH_HISTORY, KEY_THEME, KEY_USER_EMAIL,
    LOGGED_IN_MARKER, SearchHistory, Session, Theme,
};
use serde::{Serialize, de::DeserializeOwned};

// =========================================================
// 抽象接口定义
// =========================================================

/// 字符串键值存储（浏览器中即 `localStorage`）
pub trait KeyValueStore {
    /// 键不存在或存储不可用时返回 `None`
    fn get(&self, key: &str) -> Option<String>;
    /// 写入成功返回 `true`
    fn set(&self, key: &str, value: &str) -> bool;
}

// =========================================================
// 持久化适配器
// =========================================================

#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 读取 JSON 值；缺失、空白或无法解析时返回 `fallback`
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(raw) = self.store.get(key) else {
            return fallback;
        };
        if raw.trim().is_empty() {
            return fallback;
        }
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log_warn!(
                    "Could not parse stored value: {}",
                    RecipeError::from(e).in_op_with("storage.read", key)
                );
                fallback
            }
        }
    }

    /// 序列化并无条件覆盖写入
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> RecipeResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| RecipeError::from(e).in_op_with("storage.write", key))?;
        self.write_raw(key, &raw)
    }

    fn write_raw(&self, key: &str, raw: &str) -> RecipeResult<()> {
        if self.store.set(key, raw) {
            Ok(())
        } else {
            Err(RecipeError::storage("store rejected the write").in_op_with("storage.write", key))
        }
    }

    // --- 类型化访问器 ---

    /// 主题以原始字符串保存，未知值视为浅色
    pub fn theme(&self) -> Theme {
        self.store
            .get(KEY_THEME)
            .and_then(|raw| Theme::from_stored(&raw))
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: Theme) -> RecipeResult<()> {
        self.write_raw(KEY_THEME, theme.as_str())
    }

    /// 仅当 `isLoggedIn == "true"` 时存在会话
    pub fn session(&self) -> Option<Session> {
        if self.store.get(KEY_LOGGED_IN).as_deref() != Some(LOGGED_IN_MARKER) {
            return None;
        }
        Some(Session {
            email: self.store.get(KEY_USER_EMAIL).unwrap_or_default(),
        })
    }

    pub fn save_session(&self, session: &Session) -> RecipeResult<()> {
        self.write_raw(KEY_LOGGED_IN, LOGGED_IN_MARKER)?;
        self.write_raw(KEY_USER_EMAIL, &session.email)
    }

    pub fn search_history(&self) -> SearchHistory {
        self.read(KEY_SEARCH_HISTORY, SearchHistory::default())
    }

    pub fn save_search_history(&self, history: &SearchHistory) -> RecipeResult<()> {
        self.write(KEY_SEARCH_HISTORY, history)
    }

    pub fn favorites(&self) -> Favorites {
        self.read(KEY_FAVORITES, Favorites::default())
    }

    pub fn save_favorites(&self, favorites: &Favorites) -> RecipeResult<()> {
        self.write(KEY_FAVORITES, favorites)
    }
}

// =========================================================
// 测试环境实现 (MemoryStore)
// =========================================================

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;
    use recipe_shared::FavoriteEntry;

    #[test]
    fn unwritten_keys_read_defaults() {
        let persistence = Persistence::new(MemoryStore::new());

        assert_eq!(persistence.theme(), Theme::Light);
        assert_eq!(persistence.session(), None);
        assert!(persistence.search_history().is_empty());
        assert!(persistence.favorites().is_empty());
    }

    #[test]
    fn values_round_trip() {
        let store = MemoryStore::new();
        let persistence = Persistence::new(store.clone());

        let mut history = SearchHistory::default();
        history.record("pizza");
        history.record("ramen");
        let mut favorites = Favorites::default();
        favorites.toggle(FavoriteEntry {
            id: "52772".into(),
            name: "Teriyaki Chicken Casserole".into(),
            thumbnail: "https://img.test/52772.jpg".into(),
        });
        let session = Session {
            email: "cook@example.com".into(),
        };

        persistence.save_theme(Theme::Dark).unwrap();
        persistence.save_session(&session).unwrap();
        persistence.save_search_history(&history).unwrap();
        persistence.save_favorites(&favorites).unwrap();

        assert_eq!(persistence.theme(), Theme::Dark);
        assert_eq!(persistence.session(), Some(session));
        assert_eq!(persistence.search_history(), history);
        assert_eq!(persistence.favorites(), favorites);

        assert_eq!(store.raw(KEY_THEME).as_deref(), Some("dark"));
        assert_eq!(store.raw(KEY_LOGGED_IN).as_deref(), Some("true"));
        assert_eq!(
            store.raw(KEY_SEARCH_HISTORY).as_deref(),
            Some(r#"["ramen","pizza"]"#)
        );
    }

    #[test]
    fn corrupted_values_read_defaults() {
        let persistence = Persistence::new(MemoryStore::with(&[
            (KEY_THEME, "purple"),
            (KEY_LOGGED_IN, "yes"),
            (KEY_SEARCH_HISTORY, "[\"pizza\""),
            (KEY_FAVORITES, "{\"idMeal\":1}"),
        ]));

        assert_eq!(persistence.theme(), Theme::Light);
        assert_eq!(persistence.session(), None);
        assert!(persistence.search_history().is_empty());
        assert!(persistence.favorites().is_empty());
    }

    #[test]
    fn empty_value_reads_fallback() {
        let persistence = Persistence::new(MemoryStore::with(&[(KEY_SEARCH_HISTORY, "")]));
        assert!(persistence.search_history().is_empty());
    }

    #[test]
    fn session_without_email_reads_empty_email() {
        let persistence = Persistence::new(MemoryStore::with(&[(KEY_LOGGED_IN, "true")]));
        assert_eq!(persistence.session().unwrap().email, "");
    }

    #[test]
    fn rejected_write_is_storage_error() {
        let store = MemoryStore::new();
        store.set_read_only(true);
        let persistence = Persistence::new(store);

        let err = persistence.save_theme(Theme::Dark).unwrap_err();
        assert_eq!(err.status, crate::error::RecipeErrorStatus::Storage);
    }
}
