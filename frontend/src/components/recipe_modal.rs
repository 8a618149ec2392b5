use crate::components::icons::{CloseIcon, HeartIcon};
use crate::state::use_app;
use leptos::prelude::*;
use recipe_finder::Action;
use recipe_shared::{FavoriteEntry, Recipe};

/// 详情浮层
///
/// 打开后先显示加载指示，详情到达后再渲染内容。
#[component]
pub fn RecipeModal() -> impl IntoView {
    let app = use_app();
    let open = app.select(|s| s.modal_open);
    let recipe = app.select(|s| s.selected_recipe.clone());

    let close = move || app.dispatch(Action::CloseDetail);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-black/60" on:click=move |_| close()></div>
                {move || match recipe.get() {
                    Some(recipe) => view! { <RecipeDetail recipe=recipe on_close=close /> }.into_any(),
                    None => view! {
                        <span class="relative loading loading-spinner loading-lg text-primary"></span>
                    }
                    .into_any(),
                }}
            </div>
        </Show>
    }
}

#[component]
fn RecipeDetail(recipe: Recipe, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let app = use_app();
    let is_favorite = {
        let id = recipe.id.clone();
        app.select(move |s| s.is_favorite(&id))
    };
    let entry = FavoriteEntry::from(&recipe);
    let steps: Vec<String> = recipe.steps().into_iter().map(str::to_string).collect();

    view! {
        <div class="relative bg-base-100 rounded-2xl shadow-2xl w-full max-w-4xl max-h-[90vh] overflow-y-auto">
            <div class="sticky top-0 bg-base-100/90 backdrop-blur-sm p-4 border-b border-base-300 flex justify-between items-center z-10">
                <div class="flex items-center gap-3">
                    <h2 class="text-3xl md:text-4xl font-bold">{recipe.name.clone()}</h2>
                    <button
                        class="btn btn-circle btn-sm text-red-500"
                        title=move || if is_favorite.get() { "Remove from favorites" } else { "Add to favorites" }
                        on:click=move |_| app.dispatch(Action::ToggleFavorite(entry.clone()))
                    >
                        <HeartIcon filled=is_favorite attr:class="w-6 h-6" />
                    </button>
                </div>
                <button class="btn btn-ghost btn-circle" on:click=move |_| on_close()>
                    <CloseIcon attr:class="h-6 w-6" />
                </button>
            </div>

            <div class="p-6 md:p-8">
                <img
                    src=recipe.thumbnail.clone()
                    alt=recipe.name.clone()
                    class="w-full h-64 md:h-80 object-cover rounded-xl mb-8 shadow-md"
                />

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-10 text-center border-b pb-6 border-base-300">
                    <Fact title="Category">{recipe.category.clone().unwrap_or_default()}</Fact>
                    <Fact title="Cuisine">{recipe.area.clone().unwrap_or_default()}</Fact>
                    {recipe.source.clone().map(|href| view! {
                        <Fact title="Source">
                            <a href=href target="_blank" rel="noopener noreferrer" class="link link-success">
                                "View Website"
                            </a>
                        </Fact>
                    })}
                    {recipe.video.clone().map(|href| view! {
                        <Fact title="Video">
                            <a href=href target="_blank" rel="noopener noreferrer" class="link text-red-600">
                                "Watch on YouTube"
                            </a>
                        </Fact>
                    })}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    <div class="md:col-span-1">
                        <h3 class="font-bold text-2xl mb-4 text-emerald-800 dark:text-emerald-400 border-b pb-2 border-base-300">
                            "Ingredients"
                        </h3>
                        <ul class="space-y-3 text-lg">
                            {recipe.ingredients.iter().map(|item| view! {
                                <li class="flex items-start">
                                    <span class="font-semibold mr-2">{item.measure.clone()}</span>
                                    <span>{item.name.clone()}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="md:col-span-2">
                        <h3 class="font-bold text-2xl mb-4 text-emerald-800 dark:text-emerald-400 border-b pb-2 border-base-300">
                            "Instructions"
                        </h3>
                        <ol class="space-y-4 leading-relaxed text-lg">
                            {steps.into_iter().enumerate().map(|(i, step)| view! {
                                <li class="flex">
                                    <span class="badge badge-success text-white rounded-full w-7 h-7 font-bold mr-4 shrink-0 mt-1">
                                        {i + 1}
                                    </span>
                                    <span>{step}</span>
                                </li>
                            }).collect_view()}
                        </ol>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Fact(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-bold text-xl mb-2 text-emerald-800 dark:text-emerald-400">{title}</h3>
            <div class="text-lg text-base-content/80">{children()}</div>
        </div>
    }
}
