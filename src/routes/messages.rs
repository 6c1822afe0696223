//! Student enquiry inbox: search, unread badge, a detail panel that marks
//! the message read on open, and delete. Local state only.

use crate::components::AppShell;
use crate::features::messages::{types, types::EnquiryMessage};
use crate::features::records::remove;
use crate::features::session::RequireSession;
use leptos::prelude::*;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <MessagesContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn MessagesContent() -> impl IntoView {
    let messages = RwSignal::new(types::seed());
    let (query, set_query) = signal(String::new());
    let selected = RwSignal::new(None::<u32>);

    let unread_count = Memo::new(move |_| {
        messages
            .get()
            .iter()
            .filter(|message| !message.is_read)
            .count()
    });

    let filtered = move || {
        let query = query.get();
        messages
            .get()
            .into_iter()
            .filter(|message| message.matches(&query))
            .collect::<Vec<_>>()
    };

    let open = move |id: u32| {
        selected.set(Some(id));
        messages.update(|list| {
            if let Some(message) = list.iter_mut().find(|message| message.id == id) {
                message.is_read = true;
            }
        });
    };

    let delete = move |id: u32| {
        if selected.get_untracked() == Some(id) {
            selected.set(None);
        }
        messages.update(|list| remove(list, id));
    };

    let selected_message = Memo::new(move |_| {
        let id = selected.get()?;
        messages
            .get()
            .into_iter()
            .find(|message| message.id == id)
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                        "Messages"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {move || format!("{} unread", unread_count.get())}
                    </p>
                </div>
                <div class="w-72">
                    <input
                        type="search"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        placeholder="Search messages"
                        prop:value=move || query.get()
                        on:input=move |event| set_query.set(event_target_value(&event))
                    />
                </div>
            </div>

            {move || {
                selected_message
                    .get()
                    .map(|message| {
                        view! {
                            <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-3">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h2 class="font-semibold text-gray-900 dark:text-white">
                                            {message.full_name()}
                                        </h2>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            {message.email.clone()} " · " {message.date.clone()}
                                        </p>
                                    </div>
                                    <button
                                        type="button"
                                        class="text-gray-400 hover:text-gray-900 dark:hover:text-white"
                                        on:click=move |_| selected.set(None)
                                    >
                                        <span class="material-symbols-outlined">"close"</span>
                                    </button>
                                </div>
                                <p class="text-sm text-gray-700 dark:text-gray-300">
                                    {message.message.clone()}
                                </p>
                            </div>
                        }
                    })
            }}

            <div class="overflow-hidden rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "From"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Message"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Received"
                            </th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        {move || {
                            let visible = filtered();
                            if visible.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No messages match your search."
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                visible
                                    .into_iter()
                                    .map(|message| {
                                        view! { <MessageRow message=message open=open delete=delete /> }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn MessageRow<O, D>(message: EnquiryMessage, open: O, delete: D) -> impl IntoView
where
    O: Fn(u32) + Copy + Send + Sync + 'static,
    D: Fn(u32) + Copy + Send + Sync + 'static,
{
    let id = message.id;
    let is_unread = !message.is_read;

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center gap-2">
                    <Show when=move || is_unread>
                        <span class="h-2 w-2 rounded-full bg-[#947dc2]" />
                    </Show>
                    <div>
                        <p
                            class="text-sm text-gray-900 dark:text-white"
                            class:font-semibold=is_unread
                        >
                            {message.full_name()}
                        </p>
                        <p class="text-xs text-gray-500 dark:text-gray-400">
                            {message.email.clone()}
                        </p>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400 max-w-md">
                <p class="truncate">{message.message.clone()}</p>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {message.date.clone()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                <button
                    type="button"
                    class="text-gray-400 hover:text-gray-900 dark:hover:text-white mr-3"
                    on:click=move |_| open(id)
                >
                    <span class="material-symbols-outlined text-base">"visibility"</span>
                </button>
                <button
                    type="button"
                    class="text-gray-400 hover:text-red-500"
                    on:click=move |_| delete(id)
                >
                    <span class="material-symbols-outlined text-base">"delete"</span>
                </button>
            </td>
        </tr>
    }
}
