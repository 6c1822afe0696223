//! Account page for the signed-in admin. Shows the enriched identity and
//! lets the display name be rewritten through the profile document store;
//! the in-memory identity refreshes in place, its id never changes.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, use_toasts};
use crate::features::session::{RequireSession, client, types::ProfileRecord, use_session};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct RenameInput {
    id: String,
    display_name: String,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <ProfileContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let identity = session.identity();
    let (display_name, set_display_name) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let rename_action = Action::new_local(move |input: &RenameInput| {
        let input = input.clone();
        async move {
            let record = ProfileRecord {
                display_name: Some(input.display_name.clone()),
                email: None,
            };
            client::update_profile(&input.id, &record)
                .await
                .map(|()| input.display_name)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = rename_action.value().get() {
            match result {
                Ok(name) => {
                    session.refresh_display_name(&name);
                    set_display_name.set(String::new());
                    toasts.success("Profile updated", &format!("You are now \"{name}\"."));
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name = display_name.get_untracked().trim().to_string();
        if name.is_empty() {
            set_error.set(Some(AppError::Config(
                "Display name cannot be empty.".to_string(),
            )));
            return;
        }
        let Some(identity) = identity.get_untracked() else {
            return;
        };

        rename_action.dispatch(RenameInput {
            id: identity.id,
            display_name: name,
        });
    };

    view! {
        <div class="max-w-xl space-y-6">
            <h1 class="text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                "Profile"
            </h1>

            <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4">
                {move || {
                    identity
                        .get()
                        .map(|identity| {
                            view! {
                                <dl class="space-y-3 text-sm">
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"Display name"</dt>
                                        <dd class="font-medium text-gray-900 dark:text-white">
                                            {identity.display_name.clone()}
                                        </dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"Email"</dt>
                                        <dd class="font-medium text-gray-900 dark:text-white">
                                            {identity.email.clone()}
                                        </dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"User id"</dt>
                                        <dd class="font-mono text-xs text-gray-500 dark:text-gray-400">
                                            {identity.id.clone()}
                                        </dd>
                                    </div>
                                </dl>
                            }
                        })
                }}
            </div>

            <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6">
                <h2 class="font-semibold text-gray-900 dark:text-white mb-4">
                    "Change display name"
                </h2>
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        placeholder="New display name"
                        prop:value=move || display_name.get()
                        on:input=move |event| set_display_name.set(event_target_value(&event))
                    />
                    <Button button_type="submit" disabled=rename_action.pending()>
                        "Save"
                    </Button>
                    {move || {
                        rename_action
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
