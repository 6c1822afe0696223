//! Default landing page: headline metrics, top courses, and the latest
//! student enquiries. The figures are the demo dataset; no backend call is
//! involved on this page.

use crate::components::AppShell;
use crate::features::messages;
use crate::features::session::{RequireSession, use_session};
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <DashboardContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = use_session();
    let identity = session.identity();
    let greeting = move || {
        identity
            .get()
            .map(|identity| format!("Welcome back, {}", identity.display_name))
            .unwrap_or_else(|| "Welcome to NeevCode Dashboard".to_string())
    };

    let recent: Vec<_> = messages::types::seed().into_iter().rev().take(3).collect();

    view! {
        <div class="space-y-8">
            <header class="space-y-2">
                <h1 class="text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                    {greeting}
                </h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "Here's what's happening with your courses today."
                </p>
            </header>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                <MetricCard
                    background="bg-[#0d5f6c]"
                    icon="currency_rupee"
                    label="Total Sales"
                    value="₹4,59,100"
                    badge="100 Students"
                    trend="+4.5% than last month"
                />
                <MetricCard
                    background="bg-[#8b5cf6]"
                    icon="group"
                    label="Total Views"
                    value="2,400"
                    badge="+2400 People"
                    trend="+4.5% than last month"
                />
                <MetricCard
                    background="bg-[#0d5f6c]"
                    icon="school"
                    label="Active Courses"
                    value="12"
                    badge="4 Instructors"
                    trend="+2 new this month"
                />
            </div>

            <div class="grid gap-6 lg:grid-cols-2">
                <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6">
                    <h2 class="font-semibold text-gray-900 dark:text-white mb-4">
                        "Top Courses"
                    </h2>
                    <ul class="space-y-3">
                        <TopCourseRow name="React Masterclass" enrolled="38 enrolled" revenue="₹1,86,000" />
                        <TopCourseRow name="Advanced JavaScript" enrolled="29 enrolled" revenue="₹1,21,500" />
                        <TopCourseRow name="Advanced Python" enrolled="24 enrolled" revenue="₹96,400" />
                    </ul>
                </div>

                <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6">
                    <h2 class="font-semibold text-gray-900 dark:text-white mb-4">
                        "Recent Enquiries"
                    </h2>
                    <ul class="space-y-3">
                        {recent
                            .into_iter()
                            .map(|message| {
                                view! {
                                    <li class="flex items-start justify-between bg-gray-50 dark:bg-gray-900/50 p-3 rounded-lg border border-gray-200 dark:border-gray-700">
                                        <div class="min-w-0">
                                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                {message.full_name()}
                                            </p>
                                            <p class="text-sm text-gray-500 dark:text-gray-400 truncate">
                                                {message.message.clone()}
                                            </p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MetricCard(
    background: &'static str,
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    badge: &'static str,
    trend: &'static str,
) -> impl IntoView {
    let class = format!("rounded-lg {background} text-white p-6");

    view! {
        <div class=class>
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center space-x-2">
                    <span class="material-symbols-outlined text-xl">{icon}</span>
                    <span class="text-sm font-medium">{label}</span>
                </div>
                <span class="text-xs bg-white/20 px-2 py-1 rounded">{badge}</span>
            </div>
            <div class="space-y-1">
                <h2 class="text-2xl font-bold">{value}</h2>
                <p class="text-xs text-emerald-300">{trend}</p>
            </div>
        </div>
    }
}

#[component]
fn TopCourseRow(
    name: &'static str,
    enrolled: &'static str,
    revenue: &'static str,
) -> impl IntoView {
    view! {
        <li class="flex items-center justify-between bg-gray-50 dark:bg-gray-900/50 p-3 rounded-lg border border-gray-200 dark:border-gray-700">
            <div>
                <p class="text-sm font-medium text-gray-900 dark:text-white">{name}</p>
                <p class="text-xs text-gray-500 dark:text-gray-400">{enrolled}</p>
            </div>
            <span class="text-sm font-semibold text-gray-900 dark:text-white">{revenue}</span>
        </li>
    }
}
