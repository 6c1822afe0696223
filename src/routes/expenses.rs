//! Expense tracking: an add form next to the running table. Local state
//! only; the total in the header re-derives from the list.

use crate::components::{AppShell, Button, use_toasts};
use crate::features::expenses::{types, types::CATEGORIES, types::Expense};
use crate::features::records::{next_id, remove, upsert};
use crate::features::session::RequireSession;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ExpensesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <ExpensesContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn ExpensesContent() -> impl IntoView {
    let toasts = use_toasts();
    let expenses = RwSignal::new(types::seed());

    let (date, set_date) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (category, set_category) = signal(CATEGORIES[0].to_string());
    let (description, set_description) = signal(String::new());

    let total = Memo::new(move |_| {
        expenses
            .get()
            .iter()
            .map(|expense| expense.amount)
            .sum::<u32>()
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let date_value = date.get_untracked().trim().to_string();
        if date_value.is_empty() {
            toasts.error("Missing date", "Pick a date for the expense.");
            return;
        }
        let Ok(amount_value) = amount.get_untracked().trim().parse::<u32>() else {
            toasts.error("Invalid amount", "The amount must be a whole number of rupees.");
            return;
        };

        let expense = Expense {
            id: next_id(&expenses.get_untracked()),
            date: date_value,
            amount: amount_value,
            category: category.get_untracked(),
            description: description.get_untracked().trim().to_string(),
        };
        expenses.update(|list| upsert(list, expense));

        toasts.success(
            "Expense added successfully",
            &format!("Added expense of ₹{amount_value}"),
        );
        set_date.set(String::new());
        set_amount.set(String::new());
        set_category.set(CATEGORIES[0].to_string());
        set_description.set(String::new());
    };

    let delete = move |id: u32| {
        expenses.update(|list| remove(list, id));
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                    "Expense Tracking"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Total: " {move || format!("₹{}", total.get())}
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6">
                    <h2 class="font-semibold text-gray-900 dark:text-white mb-4">
                        "Add New Expense"
                    </h2>
                    <form class="space-y-4" on:submit=on_submit>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="expense-date">
                                "Date"
                            </label>
                            <input
                                id="expense-date"
                                type="date"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                prop:value=move || date.get()
                                on:input=move |event| set_date.set(event_target_value(&event))
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="expense-amount">
                                "Amount (₹)"
                            </label>
                            <input
                                id="expense-amount"
                                type="number"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="Enter amount"
                                prop:value=move || amount.get()
                                on:input=move |event| set_amount.set(event_target_value(&event))
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="expense-category">
                                "Category"
                            </label>
                            <select
                                id="expense-category"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                prop:value=move || category.get()
                                on:change=move |event| set_category.set(event_target_value(&event))
                            >
                                {CATEGORIES
                                    .into_iter()
                                    .map(|name| view! { <option value=name>{name}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="expense-description">
                                "Description"
                            </label>
                            <textarea
                                id="expense-description"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                rows="2"
                                placeholder="What was this for?"
                                prop:value=move || description.get()
                                on:input=move |event| set_description.set(event_target_value(&event))
                            ></textarea>
                        </div>
                        <Button button_type="submit">"Add Expense"</Button>
                    </form>
                </div>

                <div class="overflow-hidden rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                    "Date"
                                </th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                    "Amount"
                                </th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                    "Category"
                                </th>
                                <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                    "Description"
                                </th>
                                <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                    "Actions"
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            <For
                                each=move || expenses.get()
                                key=|expense| expense.id
                                children=move |expense: Expense| {
                                    let id = expense.id;
                                    view! {
                                        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                {expense.date.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                {format!("₹{}", expense.amount)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                {expense.category.clone()}
                                            </td>
                                            <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400">
                                                {expense.description.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
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
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
