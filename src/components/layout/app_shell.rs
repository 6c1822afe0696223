//! Shared layout wrapper with navigation chrome and content container.
//! Chrome renders only for authenticated, non-login locations, so the login
//! page stays bare and a session change alone re-renders the shell.

use crate::components::layout::{navbar::Navbar, sidebar::Sidebar};
use crate::features::session::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Wraps routes with the sidebar, navbar, and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let pathname = location.pathname;

    let is_authenticated = session.is_authenticated;
    let show_chrome =
        Signal::derive(move || is_authenticated.get() && pathname.get() != paths::LOGIN);

    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <Show when=move || show_chrome.get()>
                <Sidebar />
            </Show>
            <div class="flex flex-col flex-1 overflow-hidden">
                <Show when=move || show_chrome.get()>
                    <Navbar />
                </Show>
                <main class="flex-1 overflow-y-auto">
                    <div class="max-w-7xl mx-auto w-full p-6">{children()}</div>
                </main>
            </div>
        </div>
    }
}
