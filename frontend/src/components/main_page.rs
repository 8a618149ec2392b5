use crate::components::favorites::FavoritesStrip;
use crate::components::recipe_grid::RecipeGrid;
use crate::components::recipe_modal::RecipeModal;
use crate::components::search::SearchPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::use_app;
use leptos::prelude::*;

#[component]
pub fn MainPage() -> impl IntoView {
    let app = use_app();
    let error = app.select(|s| s.error.clone());
    let welcome = app.select(|s| s.shows_welcome());

    view! {
        <div class="bg-base-200 font-sans antialiased min-h-screen">
            <div class="container mx-auto p-4 md:p-8 max-w-6xl">
                <header class="flex flex-col md:flex-row items-center justify-between gap-4 mb-10">
                    <div class="text-center md:text-left">
                        <h1 class="text-5xl md:text-7xl font-extrabold text-emerald-700 dark:text-emerald-400 tracking-tight">
                            "Recipe Finder"
                        </h1>
                        <p class="text-base-content/70 mt-4 text-xl md:text-2xl max-w-2xl">
                            "Discover thousands of delicious recipes from around the world. Just enter a dish name to get started!"
                        </p>
                    </div>
                    <ThemeToggle />
                </header>

                <SearchPanel />
                <FavoritesStrip />

                <main>
                    {move || error.get().map(|msg| view! {
                        <div role="alert" class="alert alert-error max-w-xl mx-auto mb-6 text-lg justify-center">
                            <span>{msg}</span>
                        </div>
                    })}

                    <RecipeGrid />

                    <Show when=move || welcome.get()>
                        <div class="text-center text-base-content/60 pt-10">
                            <p class="text-2xl font-semibold">"Your culinary adventure awaits!"</p>
                            <p class="text-lg mt-1">
                                "Type a dish name or select a category to discover delicious recipes."
                            </p>
                        </div>
                    </Show>
                </main>

                <RecipeModal />
            </div>
        </div>
    }
}
