use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, use_toasts};
use crate::features::session::{RedirectIfSignedIn, SignInError, sign_in, state::use_session_events};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AppShell>
            <RedirectIfSignedIn>
                <LoginForm />
            </RedirectIfSignedIn>
        </AppShell>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let events = use_session_events();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<SignInError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        let events = events.clone();
        async move { sign_in(&events, &input.email, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    toasts.success("Login successful", "Welcome back!");
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(SignInError::InvalidCredential));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-[80vh] flex flex-col items-center justify-center">
            <div class="mb-8 text-center">
                <h1 class="text-4xl font-bold text-[#947dc2]">"NeevCode"</h1>
                <p class="mt-2 text-gray-500 dark:text-gray-400">
                    "Learning Management System"
                </p>
            </div>
            <div class="w-[350px] rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-lg p-6">
                <h2 class="text-2xl text-center font-semibold text-[#0b6380] dark:text-gray-100 mb-6">
                    "Sign in to your account"
                </h2>
                <form class="space-y-4" on:submit=on_submit>
                    <div class="space-y-2">
                        <label
                            class="block text-sm font-medium text-gray-900 dark:text-white"
                            for="email"
                        >
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-[#947dc2] focus:border-[#947dc2] block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                            autocomplete="email"
                            placeholder="admin@neevcode.com"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="space-y-2">
                        <label
                            class="block text-sm font-medium text-gray-900 dark:text-white"
                            for="password"
                        >
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-[#947dc2] focus:border-[#947dc2] block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign in"
                    </Button>
                    {move || {
                        login_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-2"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-2">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </div>
    }
}
