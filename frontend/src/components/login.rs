use crate::components::icons::AlertIcon;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::use_app;
use leptos::prelude::*;
use recipe_finder::Action;

/// 登录页
///
/// 只做非空校验，任何邮箱与密码组合都会被接受；密码不会被保存。
#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let login_error = app.select(|s| s.login_error.clone());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        app.dispatch(Action::Login {
            email: email.get(),
            password: password.get(),
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200 px-4">
            <div class="absolute top-4 right-4">
                <ThemeToggle />
            </div>

            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl md:text-4xl font-extrabold text-emerald-700 dark:text-emerald-400">
                        "Recipe Finder"
                    </h1>
                    <p class="text-base-content/70 mt-2 text-base md:text-lg">
                        "Login to start your cooking journey 🍳"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>

                        {move || login_error.get().map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertIcon attr:class="stroke-current shrink-0 h-6 w-6" />
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary">"Login"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
