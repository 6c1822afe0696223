//! Side navigation for authenticated users.

use crate::app_lib::build_info;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <div class="p-6">
                <A href=(paths::DASHBOARD) {..} class="block">
                    <h2 class="text-2xl font-bold text-[#947dc2]">"NeevCode"</h2>
                    <p class="text-xs text-gray-500 dark:text-gray-400 mt-1">
                        "Learning Management System"
                    </p>
                </A>
            </div>
            <nav class="flex-1 px-4 space-y-1">
                <SidebarLink
                    target=paths::DASHBOARD
                    icon="dashboard"
                    label="Dashboard"
                    active=Signal::derive(move || pathname.get() == paths::DASHBOARD)
                />
                <SidebarLink
                    target=paths::COURSES
                    icon="school"
                    label="Courses"
                    active=Signal::derive(move || pathname.get().starts_with(paths::COURSES))
                />
                <SidebarLink
                    target=paths::TEACHERS
                    icon="group"
                    label="Teachers"
                    active=Signal::derive(move || pathname.get().starts_with(paths::TEACHERS))
                />
                <SidebarLink
                    target=paths::MESSAGES
                    icon="mail"
                    label="Messages"
                    active=Signal::derive(move || pathname.get().starts_with(paths::MESSAGES))
                />
                <SidebarLink
                    target=paths::EXPENSES
                    icon="receipt_long"
                    label="Expenses"
                    active=Signal::derive(move || pathname.get().starts_with(paths::EXPENSES))
                />
                <SidebarLink
                    target=paths::CONTENT
                    icon="reviews"
                    label="Content"
                    active=Signal::derive(move || pathname.get().starts_with(paths::CONTENT))
                />
                <SidebarLink
                    target=paths::PROFILE
                    icon="person"
                    label="Profile"
                    active=Signal::derive(move || pathname.get().starts_with(paths::PROFILE))
                />
            </nav>

            // Footer / build info
            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    "NeevCode Admin · " {build_info::git_commit_hash()}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=move || target.to_string()
            {..}
            attr:class="group flex items-center px-3 py-2 text-sm font-medium rounded-lg transition-colors"
            class:text-purple-600=move || active.get()
            class:bg-purple-50=move || active.get()
            class:dark:bg-purple-900=move || active.get()
            class:dark:text-purple-300=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
            class:hover:text-gray-900=move || !active.get()
            class:dark:hover:text-white=move || !active.get()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-purple-600=move || active.get()
                class:text-gray-400=move || !active.get()
                class:group-hover:text-gray-900=move || !active.get()
            >
                {icon}
            </span>
            {label}
        </A>
    }
}
