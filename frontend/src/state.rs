//! 应用上下文
//!
//! 把核心库的 `AppState` 放进一个信号，通过 Context 在组件间共享。
//! 组件只读取状态并调用 `dispatch`，从不直接修改状态。

use crate::web::{BrowserHttpClient, BrowserStorage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_finder::{
    Action, AppConfig, AppState, Controller, Effect, Persistence, RecipeApi, reduce,
};

pub type BrowserController = Controller<BrowserHttpClient, BrowserStorage>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// 全部 UI 状态（组件只读）
    pub state: RwSignal<AppState>,
    controller: StoredValue<BrowserController>,
}

impl AppContext {
    /// 创建上下文并从 LocalStorage 恢复状态
    pub fn new(config: &AppConfig) -> Self {
        let controller = Controller::new(
            RecipeApi::new(config.api_base_url.clone(), BrowserHttpClient),
            Persistence::new(BrowserStorage),
        );
        let state = RwSignal::new(controller.hydrate());
        Self {
            state,
            controller: StoredValue::new(controller),
        }
    }

    /// 归约一个动作并执行其副作用
    ///
    /// 网络请求在后台运行，完成后再次调用 `dispatch`。
    pub fn dispatch(&self, action: Action) {
        let effects = self
            .state
            .try_update(|state| reduce(state, action))
            .unwrap_or_default();

        for effect in effects {
            match effect {
                Effect::Persist(persist) => {
                    self.controller.with_value(|c| c.persist(&persist));
                }
                Effect::Fetch(fetch) => {
                    let Some(controller) = self.controller.try_get_value() else {
                        continue;
                    };
                    let ctx = *self;
                    spawn_local(async move {
                        let action = controller.fetch(fetch).await;
                        ctx.dispatch(action);
                    });
                }
            }
        }
    }

    /// 派生一个只读视图，只在选出的值变化时通知订阅者
    pub fn select<T>(&self, f: impl Fn(&AppState) -> T + Send + Sync + 'static) -> Signal<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        select_from(self.state, f)
    }
}

fn select_from<T>(
    state: RwSignal<AppState>,
    f: impl Fn(&AppState) -> T + Send + Sync + 'static,
) -> Signal<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| state.with(|s| f(s))).into()
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_finder::Screen;
    use recipe_shared::{FavoriteEntry, Recipe};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn main_state() -> AppState {
        let mut state = AppState::default();
        state.screen = Screen::Main;
        state.search_term = "chick".into();
        state
    }

    /// 订阅 `view` 并统计重新计算的次数
    fn watch<T>(view: Signal<T>) -> (Memo<T>, Arc<AtomicUsize>)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let memo = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            view.get()
        });
        (memo, runs)
    }

    fn apply(state: RwSignal<AppState>, action: Action) {
        state.update(|s| {
            reduce(s, action);
        });
    }

    #[test]
    fn unrelated_action_does_not_notify_search_term() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(main_state());
        let (term, runs) = watch(select_from(state, |s| s.search_term.clone()));
        assert_eq!(term.get_untracked(), "chick");
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        apply(state, Action::ToggleTheme);

        assert_eq!(term.get_untracked(), "chick");
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn favorite_toggle_does_not_rebuild_open_recipe() {
        let owner = Owner::new();
        owner.set();

        let recipe = Recipe {
            id: "52772".into(),
            name: "Teriyaki Chicken".into(),
            thumbnail: "https://img.test/52772.jpg".into(),
            category: Some("Chicken".into()),
            area: Some("Japanese".into()),
            instructions: Some("Grill.".into()),
            ingredients: Vec::new(),
            source: None,
            video: None,
        };
        let mut initial = main_state();
        initial.selected_recipe = Some(recipe.clone());
        initial.modal_open = true;
        let state = RwSignal::new(initial);

        let (detail, detail_runs) = watch(select_from(state, |s| s.selected_recipe.clone()));
        let (hearted, _) = watch(select_from(state, |s| s.is_favorite("52772")));
        assert_eq!(detail.get_untracked(), Some(recipe.clone()));
        assert!(!hearted.get_untracked());

        apply(
            state,
            Action::ToggleFavorite(FavoriteEntry::from(&recipe)),
        );

        assert!(hearted.get_untracked());
        assert_eq!(detail.get_untracked(), Some(recipe));
        assert_eq!(detail_runs.load(Ordering::SeqCst), 1);
    }
}
