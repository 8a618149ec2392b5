//! 用户本地收藏与搜索历史
//!
//! 两个集合都在反序列化时重新规整，保证从存储读出的数据同样满足不变式。

use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// 搜索历史最多保留的条目数
pub const SEARCH_HISTORY_LIMIT: usize = 5;

// =========================================================
// 收藏 (Favorites)
// =========================================================

/// 收藏条目：菜谱的精简投影
///
/// 字段名沿用服务端命名，以兼容已有的存储数据。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

impl From<&Recipe> for FavoriteEntry {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            thumbnail: recipe.thumbnail.clone(),
        }
    }
}

/// 按 id 唯一、保持插入顺序的收藏列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FavoriteEntry>", into = "Vec<FavoriteEntry>")]
pub struct Favorites(Vec<FavoriteEntry>);

impl Favorites {
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|f| f.id == id)
    }

    /// 已收藏则移除，否则追加到末尾
    ///
    /// 返回切换后是否处于收藏状态。
    pub fn toggle(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(&entry.id) {
            self.0.retain(|f| f.id != entry.id);
            false
        } else {
            self.0.push(entry);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FavoriteEntry>> for Favorites {
    fn from(entries: Vec<FavoriteEntry>) -> Self {
        let mut favorites = Favorites::default();
        for entry in entries {
            if !favorites.contains(&entry.id) {
                favorites.0.push(entry);
            }
        }
        favorites
    }
}

impl From<Favorites> for Vec<FavoriteEntry> {
    fn from(favorites: Favorites) -> Self {
        favorites.0
    }
}

// =========================================================
// 搜索历史 (Search History)
// =========================================================

/// 最近优先、无重复、最多 5 条的搜索历史
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    /// 记录一次搜索：已存在的词移到最前，不会增长列表
    pub fn record(&mut self, term: &str) {
        self.0.retain(|t| t != term);
        self.0.insert(0, term.to_string());
        self.0.truncate(SEARCH_HISTORY_LIMIT);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for SearchHistory {
    fn from(terms: Vec<String>) -> Self {
        let mut history = Vec::with_capacity(SEARCH_HISTORY_LIMIT);
        for term in terms {
            if history.len() == SEARCH_HISTORY_LIMIT {
                break;
            }
            if !history.contains(&term) {
                history.push(term);
            }
        }
        SearchHistory(history)
    }
}

impl From<SearchHistory> for Vec<String> {
    fn from(history: SearchHistory) -> Self {
        history.0
    }
}
