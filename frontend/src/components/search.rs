//! 搜索区：搜索框、分类下拉、随机按钮与最近搜索

use crate::components::icons::SearchIcon;
use crate::state::use_app;
use leptos::prelude::*;
use recipe_finder::Action;

/// 搜索框内容是本地状态，由搜索框和历史记录共同写入
#[component]
pub fn SearchPanel() -> impl IntoView {
    let app = use_app();
    let (term, set_term) = signal(app.state.with_untracked(|s| s.search_term.clone()));

    view! {
        <div class="max-w-2xl mx-auto mb-10">
            <SearchBar term set_term />
            <div class="flex flex-col md:flex-row items-center justify-center gap-4 mt-5">
                <CategorySelect />
                <RandomButton />
            </div>
            <HistoryChips set_term />
        </div>
    }
}

#[component]
fn SearchBar(term: ReadSignal<String>, set_term: WriteSignal<String>) -> impl IntoView {
    let app = use_app();
    let loading = app.select(|s| s.loading);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        app.dispatch(Action::SubmitSearch(term.get_untracked()));
    };

    view! {
        <form
            class="flex items-center bg-base-100 rounded-full shadow-2xl p-2 md:p-3 gap-2 border border-base-300"
            on:submit=on_submit
        >
            <input
                type="text"
                placeholder="Search for a dish... (e.g., Pizza)"
                class="w-full bg-transparent px-4 py-3 md:py-4 text-lg md:text-xl border-none focus:outline-none"
                on:input=move |ev| set_term.set(event_target_value(&ev))
                prop:value=term
            />
            <button
                type="submit"
                class="btn btn-primary btn-circle btn-lg shrink-0"
                disabled=move || loading.get()
            >
                <Show
                    when=move || loading.get()
                    fallback=|| view! { <SearchIcon attr:class="h-6 w-6" /> }
                >
                    <span class="loading loading-spinner"></span>
                </Show>
            </button>
        </form>
    }
}

#[component]
fn CategorySelect() -> impl IntoView {
    let app = use_app();
    let categories = app.select(|s| s.categories.clone());
    let selected = app.select(|s| s.selected_category.clone());

    view! {
        <select
            class="select select-bordered text-base md:text-lg"
            on:change=move |ev| app.dispatch(Action::SelectCategory(event_target_value(&ev)))
            prop:value=move || selected.get()
        >
            <option value="">"Browse by Category"</option>
            <For
                each=move || categories.get()
                key=|c| c.name.clone()
                children=move |category| {
                    let value = category.name.clone();
                    view! { <option value=value>{category.name}</option> }
                }
            />
        </select>
    }
}

#[component]
fn RandomButton() -> impl IntoView {
    let app = use_app();
    let fetching = app.select(|s| s.random_loading);
    let disabled = app.select(|s| s.random_disabled());

    view! {
        <button
            class="btn btn-ghost text-emerald-700 dark:text-emerald-300 text-base md:text-lg"
            disabled=move || disabled.get()
            on:click=move |_| app.dispatch(Action::RequestRandom)
        >
            {move || if fetching.get() { "Fetching..." } else { "Or get a random recipe ✨" }}
        </button>
    }
}

#[component]
fn HistoryChips(set_term: WriteSignal<String>) -> impl IntoView {
    let app = use_app();
    let history = app.select(|s| s.history.as_slice().to_vec());

    view! {
        <Show when=move || history.with(|h| !h.is_empty())>
            <div class="text-center mt-6">
                <span class="text-sm md:text-base text-base-content/60 mr-2">"Recent searches:"</span>
                <div class="inline-flex flex-wrap gap-2 justify-center">
                    <For
                        each=move || history.get()
                        key=|term| term.clone()
                        children=move |term| {
                            let picked = term.clone();
                            view! {
                                <button
                                    class="badge badge-lg badge-neutral cursor-pointer"
                                    on:click=move |_| {
                                        set_term.set(picked.clone());
                                        app.dispatch(Action::PickHistory(picked.clone()));
                                    }
                                >
                                    {term}
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
