use serde::{Deserialize, Serialize};

pub mod library;
pub mod protocol;
pub mod recipe;

pub use library::{FavoriteEntry, Favorites, SEARCH_HISTORY_LIMIT, SearchHistory};
pub use recipe::{Ingredient, MAX_INGREDIENTS, Recipe, instruction_steps};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const KEY_THEME: &str = "theme";
pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_SEARCH_HISTORY: &str = "recipeSearchHistory";
pub const KEY_FAVORITES: &str = "recipeFavorites";

/// `isLoggedIn` 键在已登录时保存的原始字符串
pub const LOGGED_IN_MARKER: &str = "true";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// 解析存储中的原始字符串，未知值返回 `None`
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// 登录会话。存在即表示已认证，没有过期时间。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

/// 分类选项，来自 `list.php?c=list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "strCategory")]
    pub name: String,
}
