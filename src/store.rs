//! 应用状态与归约器
//!
//! 所有 UI 状态集中在 `AppState`；`reduce` 同步、完整地应用一个 `Action`，
//! 并返回需要执行的副作用（网络请求或持久化写入）。网络请求完成后，
//! 结果以新的 `Action` 回到 `reduce`。
//!
//! 每类请求流都携带单调递增的令牌，完成时令牌已过期的响应会被丢弃。

use crate::error::RecipeResult;
use recipe_shared::{Category, FavoriteEntry, Favorites, Recipe, SearchHistory, Session, Theme};

// =========================================================
// 用户可见消息
// =========================================================

pub const MSG_EMPTY_SEARCH: &str = "Please enter a dish name.";
pub const MSG_SEARCH_FAILED: &str = "Failed to fetch recipes. Please try again later.";
pub const MSG_DETAIL_FAILED: &str = "Failed to fetch recipe details.";
pub const MSG_RANDOM_MISSING: &str = "Could not fetch a random recipe.";
pub const MSG_RANDOM_FAILED: &str = "Failed to fetch a random recipe. Please try again later.";
pub const MSG_LOGIN_INCOMPLETE: &str = "Please enter both email and password.";

pub fn no_results_message(term: &str) -> String {
    format!("No recipes found for \"{term}\".")
}

// =========================================================
// 状态 (State)
// =========================================================

pub type RequestToken = u64;

/// 顶层界面，严格线性：Splash -> Login -> Main
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    Login,
    Main,
}

/// 各请求流当前有效的令牌
///
/// 名称搜索和分类筛选写入同一个结果列表，共用 `results`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct FlowTokens {
    results: RequestToken,
    detail: RequestToken,
    random: RequestToken,
}

fn bump(token: &mut RequestToken) -> RequestToken {
    *token = token.wrapping_add(1);
    *token
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub screen: Screen,
    pub theme: Theme,
    pub session: Option<Session>,
    pub login_error: Option<String>,

    pub search_term: String,
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    pub random_loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,

    pub categories: Vec<Category>,
    pub selected_category: String,

    pub selected_recipe: Option<Recipe>,
    pub modal_open: bool,

    pub history: SearchHistory,
    pub favorites: Favorites,

    tokens: FlowTokens,
}

impl AppState {
    /// 以持久化数据构建初始状态，界面从 Splash 开始
    pub fn new(
        theme: Theme,
        session: Option<Session>,
        history: SearchHistory,
        favorites: Favorites,
    ) -> Self {
        Self {
            theme,
            session,
            history,
            favorites,
            ..Default::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// 尚未搜索、没有结果且不在加载时显示欢迎提示
    pub fn shows_welcome(&self) -> bool {
        !self.loading && self.recipes.is_empty() && !self.has_searched
    }

    pub fn random_disabled(&self) -> bool {
        self.random_loading || self.loading
    }
}

// =========================================================
// 动作与副作用 (Actions & Effects)
// =========================================================

#[derive(Debug)]
pub enum Action {
    // --- 用户意图 ---
    Mounted,
    SplashElapsed,
    Login { email: String, password: String },
    ToggleTheme,
    SubmitSearch(String),
    PickHistory(String),
    SelectCategory(String),
    RequestRandom,
    SelectRecipe(String),
    ToggleFavorite(FavoriteEntry),
    CloseDetail,

    // --- 请求完成 ---
    CategoriesLoaded(Vec<Category>),
    SearchFinished {
        token: RequestToken,
        term: String,
        outcome: RecipeResult<Option<Vec<Recipe>>>,
    },
    CategoryFinished {
        token: RequestToken,
        outcome: RecipeResult<Vec<Recipe>>,
    },
    DetailFinished {
        token: RequestToken,
        outcome: RecipeResult<Option<Recipe>>,
    },
    RandomFinished {
        token: RequestToken,
        outcome: RecipeResult<Option<Recipe>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(Fetch),
    Persist(Persist),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Categories,
    Search { token: RequestToken, term: String },
    Category { token: RequestToken, category: String },
    Detail { token: RequestToken, id: String },
    Random { token: RequestToken },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persist {
    Theme(Theme),
    Session(Session),
    SearchHistory(SearchHistory),
    Favorites(Favorites),
}

// =========================================================
// 归约器 (Reducer)
// =========================================================

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::Mounted => vec![Effect::Fetch(Fetch::Categories)],

        Action::SplashElapsed => {
            if state.screen == Screen::Splash {
                state.screen = if state.is_authenticated() {
                    Screen::Main
                } else {
                    Screen::Login
                };
            }
            Vec::new()
        }

        Action::Login { email, password } => login(state, &email, &password),

        Action::ToggleTheme => {
            state.theme = state.theme.toggled();
            vec![Effect::Persist(Persist::Theme(state.theme))]
        }

        Action::SubmitSearch(term) => search(state, term.trim()),

        Action::PickHistory(term) => search(state, &term),

        Action::SelectCategory(category) => select_category(state, category),

        Action::RequestRandom => {
            state.random_loading = true;
            state.error = None;
            let token = bump(&mut state.tokens.random);
            vec![Effect::Fetch(Fetch::Random { token })]
        }

        Action::SelectRecipe(id) => select_recipe(state, id),

        Action::ToggleFavorite(entry) => {
            state.favorites.toggle(entry);
            vec![Effect::Persist(Persist::Favorites(state.favorites.clone()))]
        }

        Action::CloseDetail => {
            state.modal_open = false;
            state.selected_recipe = None;
            bump(&mut state.tokens.detail);
            Vec::new()
        }

        Action::CategoriesLoaded(categories) => {
            state.categories = categories;
            Vec::new()
        }

        Action::SearchFinished {
            token,
            term,
            outcome,
        } => {
            if token != state.tokens.results {
                log_info!("Discarding stale search response for \"{}\"", term);
                return Vec::new();
            }
            state.loading = false;
            match outcome {
                Ok(Some(recipes)) => {
                    state.recipes = recipes;
                    state.history.record(&term);
                    vec![Effect::Persist(Persist::SearchHistory(
                        state.history.clone(),
                    ))]
                }
                Ok(None) => {
                    state.error = Some(no_results_message(&term));
                    Vec::new()
                }
                Err(_) => {
                    state.error = Some(MSG_SEARCH_FAILED.to_string());
                    Vec::new()
                }
            }
        }

        Action::CategoryFinished { token, outcome } => {
            if token != state.tokens.results {
                log_info!("Discarding stale category response");
                return Vec::new();
            }
            state.loading = false;
            match outcome {
                Ok(recipes) => state.recipes = recipes,
                Err(_) => state.error = Some(MSG_SEARCH_FAILED.to_string()),
            }
            Vec::new()
        }

        Action::DetailFinished { token, outcome } => {
            if token != state.tokens.detail {
                log_info!("Discarding stale detail response");
                return Vec::new();
            }
            match outcome {
                Ok(Some(recipe)) => state.selected_recipe = Some(recipe),
                Ok(None) | Err(_) => {
                    state.error = Some(MSG_DETAIL_FAILED.to_string());
                    state.modal_open = false;
                    state.selected_recipe = None;
                }
            }
            Vec::new()
        }

        Action::RandomFinished { token, outcome } => {
            if token != state.tokens.random {
                log_info!("Discarding stale random response");
                return Vec::new();
            }
            state.random_loading = false;
            match outcome {
                Ok(Some(recipe)) => select_recipe(state, recipe.id),
                Ok(None) => {
                    state.error = Some(MSG_RANDOM_MISSING.to_string());
                    Vec::new()
                }
                Err(_) => {
                    state.error = Some(MSG_RANDOM_FAILED.to_string());
                    Vec::new()
                }
            }
        }
    }
}

fn login(state: &mut AppState, email: &str, password: &str) -> Vec<Effect> {
    if state.screen != Screen::Login {
        return Vec::new();
    }
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        state.login_error = Some(MSG_LOGIN_INCOMPLETE.to_string());
        return Vec::new();
    }

    let session = Session {
        email: email.to_string(),
    };
    state.login_error = None;
    state.session = Some(session.clone());
    state.screen = Screen::Main;
    vec![Effect::Persist(Persist::Session(session))]
}

/// 名称搜索；空词只报错，不发请求，也不改动已提交的搜索词
fn search(state: &mut AppState, term: &str) -> Vec<Effect> {
    state.has_searched = true;
    if term.is_empty() {
        state.error = Some(MSG_EMPTY_SEARCH.to_string());
        return Vec::new();
    }

    state.search_term = term.to_string();
    state.selected_category.clear();
    state.loading = true;
    state.error = None;
    state.recipes.clear();
    let token = bump(&mut state.tokens.results);
    vec![Effect::Fetch(Fetch::Search {
        token,
        term: term.to_string(),
    })]
}

/// 分类筛选；空分类清空结果并作废进行中的结果请求
fn select_category(state: &mut AppState, category: String) -> Vec<Effect> {
    state.selected_category = category.clone();
    if category.is_empty() {
        state.recipes.clear();
        state.has_searched = false;
        state.loading = false;
        bump(&mut state.tokens.results);
        return Vec::new();
    }

    state.has_searched = true;
    state.loading = true;
    state.error = None;
    state.recipes.clear();
    let token = bump(&mut state.tokens.results);
    vec![Effect::Fetch(Fetch::Category { token, category })]
}

/// 乐观地先打开详情层，再异步填充
fn select_recipe(state: &mut AppState, id: String) -> Vec<Effect> {
    state.modal_open = true;
    state.selected_recipe = None;
    state.error = None;
    let token = bump(&mut state.tokens.detail);
    vec![Effect::Fetch(Fetch::Detail { token, id })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;

    fn main_state() -> AppState {
        AppState {
            screen: Screen::Main,
            session: Some(Session {
                email: "cook@example.com".into(),
            }),
            ..Default::default()
        }
    }

    fn recipe(id: &str) -> Recipe {
        serde_json::from_value(serde_json::json!({
            "idMeal": id,
            "strMeal": format!("Meal {id}"),
            "strMealThumb": format!("https://img.test/{id}.jpg")
        }))
        .unwrap()
    }

    fn only_fetch(effects: Vec<Effect>) -> Fetch {
        match effects.as_slice() {
            [Effect::Fetch(fetch)] => fetch.clone(),
            other => panic!("expected a single fetch, got {:?}", other),
        }
    }

    #[test]
    fn splash_goes_to_login_when_unauthenticated() {
        let mut state = AppState::default();
        assert_eq!(state.screen, Screen::Splash);

        reduce(&mut state, Action::SplashElapsed);
        assert_eq!(state.screen, Screen::Login);

        // 只触发一次
        reduce(&mut state, Action::SplashElapsed);
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn splash_goes_to_main_with_session() {
        let mut state = AppState::new(
            Theme::Dark,
            Some(Session {
                email: "a@b.c".into(),
            }),
            SearchHistory::default(),
            Favorites::default(),
        );

        reduce(&mut state, Action::SplashElapsed);
        assert_eq!(state.screen, Screen::Main);
    }

    #[test]
    fn login_requires_both_fields() {
        let mut state = AppState {
            screen: Screen::Login,
            ..Default::default()
        };

        let effects = reduce(
            &mut state,
            Action::Login {
                email: "cook@example.com".into(),
                password: "   ".into(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.login_error.as_deref(), Some(MSG_LOGIN_INCOMPLETE));
    }

    #[test]
    fn login_is_ignored_outside_login_screen() {
        let mut state = AppState::default();
        let effects = reduce(
            &mut state,
            Action::Login {
                email: "a@b.c".into(),
                password: "pw".into(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.screen, Screen::Splash);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn empty_search_sets_error_without_request() {
        let mut state = main_state();
        let effects = reduce(&mut state, Action::SubmitSearch("   ".into()));

        assert!(effects.is_empty());
        assert_eq!(state.error.as_deref(), Some(MSG_EMPTY_SEARCH));
        assert!(state.has_searched);
        assert!(!state.loading);
    }

    #[test]
    fn blank_search_keeps_committed_term() {
        let mut state = main_state();
        state.search_term = "pizza".into();
        state.recipes = vec![recipe("1")];

        reduce(&mut state, Action::SubmitSearch("   ".into()));

        assert_eq!(state.search_term, "pizza");
        assert_eq!(state.recipes, vec![recipe("1")]);
        assert_eq!(state.error.as_deref(), Some(MSG_EMPTY_SEARCH));
    }

    #[test]
    fn search_clears_previous_results_and_category() {
        let mut state = main_state();
        state.recipes = vec![recipe("1")];
        state.selected_category = "Beef".into();
        state.error = Some("old".into());

        let fetch = only_fetch(reduce(&mut state, Action::SubmitSearch(" pizza ".into())));

        assert!(matches!(fetch, Fetch::Search { ref term, .. } if term == "pizza"));
        assert!(state.loading);
        assert!(state.recipes.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.selected_category, "");
        assert_eq!(state.search_term, "pizza");
    }

    #[test]
    fn newer_search_wins_over_late_older_response() {
        let mut state = main_state();
        let Fetch::Search { token: first, .. } =
            only_fetch(reduce(&mut state, Action::SubmitSearch("soup".into())))
        else {
            unreachable!()
        };
        let Fetch::Search { token: second, .. } =
            only_fetch(reduce(&mut state, Action::SubmitSearch("pie".into())))
        else {
            unreachable!()
        };

        reduce(
            &mut state,
            Action::SearchFinished {
                token: second,
                term: "pie".into(),
                outcome: Ok(Some(vec![recipe("2")])),
            },
        );
        let effects = reduce(
            &mut state,
            Action::SearchFinished {
                token: first,
                term: "soup".into(),
                outcome: Ok(Some(vec![recipe("1")])),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.recipes, vec![recipe("2")]);
        assert_eq!(state.history.as_slice(), ["pie"]);
    }

    #[test]
    fn search_without_hits_reports_term() {
        let mut state = main_state();
        let Fetch::Search { token, .. } =
            only_fetch(reduce(&mut state, Action::SubmitSearch("xyz".into())))
        else {
            unreachable!()
        };

        let effects = reduce(
            &mut state,
            Action::SearchFinished {
                token,
                term: "xyz".into(),
                outcome: Ok(None),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.error.as_deref(), Some("No recipes found for \"xyz\"."));
        assert!(state.history.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn empty_category_clears_results_and_cancels_pending() {
        let mut state = main_state();
        let Fetch::Category { token, .. } =
            only_fetch(reduce(&mut state, Action::SelectCategory("Beef".into())))
        else {
            unreachable!()
        };

        let effects = reduce(&mut state, Action::SelectCategory(String::new()));
        assert!(effects.is_empty());
        assert!(!state.has_searched);
        assert!(!state.loading);
        assert!(state.shows_welcome());

        reduce(
            &mut state,
            Action::CategoryFinished {
                token,
                outcome: Ok(vec![recipe("1")]),
            },
        );
        assert!(state.recipes.is_empty());
    }

    #[test]
    fn category_failure_sets_generic_error() {
        let mut state = main_state();
        let Fetch::Category { token, .. } =
            only_fetch(reduce(&mut state, Action::SelectCategory("Beef".into())))
        else {
            unreachable!()
        };

        reduce(
            &mut state,
            Action::CategoryFinished {
                token,
                outcome: Err(RecipeError::network("offline")),
            },
        );

        assert_eq!(state.error.as_deref(), Some(MSG_SEARCH_FAILED));
        assert!(!state.loading);
    }

    #[test]
    fn select_opens_overlay_before_data() {
        let mut state = main_state();
        let fetch = only_fetch(reduce(&mut state, Action::SelectRecipe("52772".into())));

        assert!(matches!(fetch, Fetch::Detail { ref id, .. } if id == "52772"));
        assert!(state.modal_open);
        assert_eq!(state.selected_recipe, None);
    }

    #[test]
    fn detail_after_close_is_discarded() {
        let mut state = main_state();
        let Fetch::Detail { token, .. } =
            only_fetch(reduce(&mut state, Action::SelectRecipe("1".into())))
        else {
            unreachable!()
        };
        reduce(&mut state, Action::CloseDetail);

        reduce(
            &mut state,
            Action::DetailFinished {
                token,
                outcome: Ok(Some(recipe("1"))),
            },
        );

        assert!(!state.modal_open);
        assert_eq!(state.selected_recipe, None);
    }

    #[test]
    fn random_success_chains_into_detail() {
        let mut state = main_state();
        let Fetch::Random { token } = only_fetch(reduce(&mut state, Action::RequestRandom)) else {
            unreachable!()
        };
        assert!(state.random_disabled());

        let fetch = only_fetch(reduce(
            &mut state,
            Action::RandomFinished {
                token,
                outcome: Ok(Some(recipe("77"))),
            },
        ));

        assert!(matches!(fetch, Fetch::Detail { ref id, .. } if id == "77"));
        assert!(!state.random_loading);
        assert!(state.modal_open);
    }

    #[test]
    fn random_without_meal_sets_error() {
        let mut state = main_state();
        let Fetch::Random { token } = only_fetch(reduce(&mut state, Action::RequestRandom)) else {
            unreachable!()
        };

        reduce(
            &mut state,
            Action::RandomFinished {
                token,
                outcome: Ok(None),
            },
        );

        assert_eq!(state.error.as_deref(), Some(MSG_RANDOM_MISSING));
        assert!(!state.modal_open);
    }

    #[test]
    fn favorite_toggle_persists_each_change() {
        let mut state = main_state();
        let entry = FavoriteEntry::from(&recipe("5"));

        let effects = reduce(&mut state, Action::ToggleFavorite(entry.clone()));
        assert!(state.is_favorite("5"));
        assert_eq!(
            effects,
            vec![Effect::Persist(Persist::Favorites(state.favorites.clone()))]
        );

        reduce(&mut state, Action::ToggleFavorite(entry));
        assert!(!state.is_favorite("5"));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn theme_toggle_persists() {
        let mut state = AppState::default();
        let effects = reduce(&mut state, Action::ToggleTheme);

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(effects, vec![Effect::Persist(Persist::Theme(Theme::Dark))]);
    }
}
