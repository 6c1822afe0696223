//! Top bar with the notifications menu, the signed-in identity, and the
//! sign-out action. Sign-out clears local state even when the backend call
//! fails; the discrepancy is surfaced as a warning toast, never an error.

use crate::components::use_toasts;
use crate::features::session::{sign_out, state::use_session_events, use_session};
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let events = use_session_events();
    let toasts = use_toasts();
    let identity = session.identity();

    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };

    let on_sign_out = move |_| {
        let events = events.clone();
        spawn_local(async move {
            if let Err(err) = sign_out(&events).await {
                toasts.warning(
                    "Signed out locally",
                    &format!("The server could not complete sign-out: {err}"),
                );
            }
        });
    };

    view! {
        <div class="h-16 border-b border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 px-6 flex items-center justify-between">
            <div class="flex-1" />
            <div class="flex items-center space-x-4">
                <div class="relative">
                    <button
                        type="button"
                        class="relative p-2 rounded-lg text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open notifications"</span>
                        <span class="material-symbols-outlined">"notifications"</span>
                        <span class="absolute top-1 right-1 h-2 w-2 bg-[#947dc2] rounded-full" />
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="absolute right-0 mt-2 w-80 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-lg p-4 z-40">
                            <h3 class="font-semibold mb-2 text-gray-900 dark:text-white">
                                "Notifications"
                            </h3>
                            <div class="text-sm text-gray-500 dark:text-gray-400">
                                "No new notifications"
                            </div>
                        </div>
                    </Show>
                </div>
                <span class="text-sm font-medium text-gray-700 dark:text-gray-200">
                    {move || {
                        identity
                            .get()
                            .map(|identity| identity.display_name)
                            .unwrap_or_default()
                    }}
                </span>
                <button
                    type="button"
                    class="text-sm font-medium text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                    on:click=on_sign_out
                >
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
