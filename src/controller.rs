use crate::api::RecipeApi;
use crate::error::RecipeResult;
use crate::request::HttpClient;
use crate::storage::{KeyValueStore, Persistence};
use crate::store::{Action, AppState, Fetch, Persist};

// =========================================================
// 副作用执行器
// =========================================================

/// 把归约器产生的 `Effect` 落到真实的网络与存储上
///
/// 持久化同步完成；网络请求异步完成后返回一个新的 `Action`，
/// 由调用方再交给 `reduce`。
#[derive(Debug, Clone)]
pub struct Controller<C, S> {
    api: RecipeApi<C>,
    persistence: Persistence<S>,
}

impl<C: HttpClient, S: KeyValueStore> Controller<C, S> {
    pub fn new(api: RecipeApi<C>, persistence: Persistence<S>) -> Self {
        Self { api, persistence }
    }

    pub fn api(&self) -> &RecipeApi<C> {
        &self.api
    }

    /// 从本地存储恢复初始状态
    pub fn hydrate(&self) -> AppState {
        AppState::new(
            self.persistence.theme(),
            self.persistence.session(),
            self.persistence.search_history(),
            self.persistence.favorites(),
        )
    }

    /// 写入失败只记录日志，内存中的状态保持不变
    pub fn persist(&self, effect: &Persist) {
        let result = match effect {
            Persist::Theme(theme) => self.persistence.save_theme(*theme),
            Persist::Session(session) => self.persistence.save_session(session),
            Persist::SearchHistory(history) => self.persistence.save_search_history(history),
            Persist::Favorites(favorites) => self.persistence.save_favorites(favorites),
        };
        if let Err(e) = result {
            log_error!("Failed to persist state: {}", e);
        }
    }

    pub async fn fetch(&self, effect: Fetch) -> Action {
        match effect {
            Fetch::Categories => Action::CategoriesLoaded(self.api.list_categories().await),

            Fetch::Search { token, term } => {
                let outcome = logged(self.api.search_by_name(&term).await);
                Action::SearchFinished {
                    token,
                    term,
                    outcome,
                }
            }

            Fetch::Category { token, category } => Action::CategoryFinished {
                token,
                outcome: logged(self.api.filter_by_category(&category).await),
            },

            Fetch::Detail { token, id } => Action::DetailFinished {
                token,
                outcome: logged(self.api.lookup_by_id(&id).await),
            },

            Fetch::Random { token } => Action::RandomFinished {
                token,
                outcome: logged(self.api.fetch_random().await),
            },
        }
    }
}

fn logged<T>(outcome: RecipeResult<T>) -> RecipeResult<T> {
    if let Err(e) = &outcome {
        log_error!("Request failed: {}", e);
    }
    outcome
}
