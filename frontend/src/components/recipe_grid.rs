use crate::components::icons::HeartIcon;
use crate::state::use_app;
use leptos::prelude::*;
use recipe_finder::Action;
use recipe_shared::{FavoriteEntry, Recipe};

/// 缩略图加载失败时的替代图
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/f8f9fa/343a40?text=Image+Not+Found";

const SKELETON_CARDS: usize = 8;

#[component]
pub fn RecipeGrid() -> impl IntoView {
    let app = use_app();
    let loading = app.select(|s| s.loading);
    let recipes = app.select(|s| s.recipes.clone());

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8">
            <Show
                when=move || loading.get()
                fallback=move || view! {
                    <For
                        each=move || recipes.get()
                        key=|r| r.id.clone()
                        children=|recipe| view! { <RecipeCard recipe=recipe /> }
                    />
                }
            >
                {(0..SKELETON_CARDS).map(|_| view! { <SkeletonCard /> }).collect_view()}
            </Show>
        </div>
    }
}

#[component]
fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-md overflow-hidden animate-pulse">
            <div class="w-full h-52 bg-base-300"></div>
            <div class="p-4">
                <div class="h-6 rounded-md bg-base-300 w-3/4"></div>
            </div>
        </div>
    }
}

#[component]
fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let app = use_app();
    let id = recipe.id.clone();
    let is_favorite = {
        let id = id.clone();
        app.select(move |s| s.is_favorite(&id))
    };
    let entry = FavoriteEntry::from(&recipe);
    let (image_failed, set_image_failed) = signal(false);
    let thumbnail = recipe.thumbnail;
    let alt = recipe.name.clone();
    let name = recipe.name;

    view! {
        <div
            class="card relative bg-base-100 shadow-lg overflow-hidden hover:scale-[1.03] transition-transform duration-300 group cursor-pointer"
            on:click=move |_| app.dispatch(Action::SelectRecipe(id.clone()))
        >
            <img
                src=move || if image_failed.get() { PLACEHOLDER_IMAGE.to_string() } else { thumbnail.clone() }
                alt=alt
                class="w-full h-52 object-cover"
                on:error=move |_| set_image_failed.set(true)
            />
            <button
                class="btn btn-circle btn-sm absolute top-3 right-3 bg-base-100/80 text-red-500 shadow-md"
                on:click=move |ev| {
                    ev.stop_propagation();
                    app.dispatch(Action::ToggleFavorite(entry.clone()));
                }
            >
                <HeartIcon filled=is_favorite attr:class="w-6 h-6" />
            </button>
            <div class="card-body p-4">
                <h3 class="card-title text-xl md:text-2xl group-hover:text-emerald-700 dark:group-hover:text-emerald-400 transition-colors">
                    {name}
                </h3>
            </div>
        </div>
    }
}
