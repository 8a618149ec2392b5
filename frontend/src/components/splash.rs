use leptos::prelude::*;

#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-emerald-600 dark:bg-slate-900 transition-colors">
            <div class="text-center">
                <h1 class="text-4xl md:text-6xl font-extrabold text-white tracking-tight">
                    "Recipe Finder"
                </h1>
                <p class="text-emerald-100 mt-4 text-lg md:text-xl">
                    "Cooking up something tasty for you..."
                </p>
            </div>
        </div>
    }
}
