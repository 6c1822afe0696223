//! Content management: course reviews awaiting moderation. Approving takes
//! a review out of the moderation queue; deletion removes it outright.
//! Local state only.

use crate::components::{AppShell, use_toasts};
use crate::features::records::remove;
use crate::features::reviews::{types, types::Review};
use crate::features::session::RequireSession;
use leptos::prelude::*;

#[component]
pub fn ContentPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <ContentManagement />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn ContentManagement() -> impl IntoView {
    let toasts = use_toasts();
    let reviews = RwSignal::new(types::seed());

    let pending_count = Memo::new(move |_| {
        reviews
            .get()
            .iter()
            .filter(|review| review.in_review)
            .count()
    });

    let approve = move |id: u32| {
        reviews.update(|list| {
            if let Some(review) = list.iter_mut().find(|review| review.id == id) {
                review.in_review = false;
            }
        });
        toasts.success("Review approved", "It is now visible on the site.");
    };

    let delete = move |id: u32| {
        reviews.update(|list| remove(list, id));
        toasts.success("Review deleted", "");
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                        "Content Management"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {move || format!("{} awaiting review", pending_count.get())}
                    </p>
                </div>
            </div>

            <div class="grid gap-4 md:grid-cols-2">
                <For
                    each=move || reviews.get()
                    key=|review| review.id
                    children=move |review: Review| {
                        let id = review.id;
                        let in_review = review.in_review;
                        let stars = "★".repeat(review.rating as usize);
                        view! {
                            <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-5 space-y-3">
                                <div class="flex items-start justify-between">
                                    <div class="flex items-center gap-3">
                                        <span class="h-9 w-9 rounded-full bg-purple-100 dark:bg-purple-900/30 text-[#947dc2] flex items-center justify-center text-xs font-semibold">
                                            {review.initials()}
                                        </span>
                                        <div>
                                            <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                {review.name.clone()}
                                            </p>
                                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                                {review.course_name.clone()} " · " {review.date.clone()}
                                            </p>
                                        </div>
                                    </div>
                                    <Show when=move || in_review>
                                        <span class="px-2 py-1 rounded-full text-xs font-medium bg-amber-50 text-amber-700">
                                            "In review"
                                        </span>
                                    </Show>
                                </div>
                                <p class="text-amber-500 text-sm tracking-widest">{stars}</p>
                                <p class="text-sm text-gray-700 dark:text-gray-300">
                                    {review.comment.clone()}
                                </p>
                                <div class="flex justify-end gap-3 text-sm">
                                    <Show when=move || in_review>
                                        <button
                                            type="button"
                                            class="font-medium text-emerald-600 hover:text-emerald-700"
                                            on:click=move |_| approve(id)
                                        >
                                            "Approve"
                                        </button>
                                    </Show>
                                    <button
                                        type="button"
                                        class="font-medium text-gray-400 hover:text-red-500"
                                        on:click=move |_| delete(id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
