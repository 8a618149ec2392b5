use crate::state::use_app;
use leptos::prelude::*;
use recipe_finder::Action;

/// 收藏横条，点击条目打开详情
#[component]
pub fn FavoritesStrip() -> impl IntoView {
    let app = use_app();
    let favorites = app.select(|s| s.favorites.iter().cloned().collect::<Vec<_>>());

    view! {
        <Show when=move || favorites.with(|f| !f.is_empty())>
            <section class="mb-10">
                <h2 class="text-2xl md:text-3xl font-semibold mb-3">"Your Favorites ❤️"</h2>
                <div class="flex gap-4 overflow-x-auto pb-2">
                    <For
                        each=move || favorites.get()
                        key=|f| f.id.clone()
                        children=move |fav| {
                            let id = fav.id;
                            let alt = fav.name.clone();
                            view! {
                                <div
                                    class="card min-w-[180px] bg-base-100 shadow-md cursor-pointer hover:shadow-lg hover:-translate-y-1 transition"
                                    on:click=move |_| app.dispatch(Action::SelectRecipe(id.clone()))
                                >
                                    <img
                                        src=fav.thumbnail
                                        alt=alt
                                        class="w-full h-28 object-cover rounded-t-xl"
                                    />
                                    <div class="p-3">
                                        <p class="font-semibold text-sm md:text-base line-clamp-2">{fav.name}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
