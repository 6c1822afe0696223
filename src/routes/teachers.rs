//! Staff directory. Pure local CRUD over the teacher list; there is no
//! persistence endpoint for this collection.

use crate::components::{AppShell, Button, use_toasts};
use crate::features::records::{next_id, remove, upsert};
use crate::features::session::RequireSession;
use crate::features::teachers::{types, types::EMPLOYMENT_TYPES, types::Teacher};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn TeachersPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <TeachersContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn TeachersContent() -> impl IntoView {
    let toasts = use_toasts();
    let teachers = RwSignal::new(types::seed());

    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<u32>);
    let (name, set_name) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (status, set_status) = signal(EMPLOYMENT_TYPES[0].to_string());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());

    let reset_form = move || {
        editing.set(None);
        set_name.set(String::new());
        set_role.set(String::new());
        set_subject.set(String::new());
        set_status.set(EMPLOYMENT_TYPES[0].to_string());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_show_form.set(false);
    };

    let start_editing = move |teacher: &Teacher| {
        editing.set(Some(teacher.id));
        set_name.set(teacher.name.clone());
        set_role.set(teacher.role.clone());
        set_subject.set(teacher.subject.clone());
        set_status.set(teacher.status.clone());
        set_email.set(teacher.email.clone());
        set_phone.set(teacher.phone.clone());
        set_show_form.set(true);
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        if name_value.is_empty() || email_value.is_empty() {
            toasts.error("Missing details", "Name and email are required.");
            return;
        }

        let id = editing
            .get_untracked()
            .unwrap_or_else(|| next_id(&teachers.get_untracked()));
        let was_editing = editing.get_untracked().is_some();
        let teacher = Teacher {
            id,
            name: name_value.clone(),
            role: role.get_untracked().trim().to_string(),
            subject: subject.get_untracked().trim().to_string(),
            status: status.get_untracked(),
            email: email_value,
            phone: phone.get_untracked().trim().to_string(),
        };

        teachers.update(|list| upsert(list, teacher));
        reset_form();

        if was_editing {
            toasts.success("Teacher updated", &name_value);
        } else {
            toasts.success("Teacher added", &name_value);
        }
    };

    let delete = move |id: u32| {
        teachers.update(|list| remove(list, id));
        toasts.success("Teacher removed", "");
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                    "Teachers"
                </h1>
                <Button on:click=move |_| {
                    if show_form.get_untracked() {
                        reset_form();
                    } else {
                        set_show_form.set(true);
                    }
                }>
                    {move || if show_form.get() { "Cancel" } else { "Add Teacher" }}
                </Button>
            </div>

            <Show when=move || show_form.get()>
                <form
                    class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4"
                    on:submit=on_submit
                >
                    <h2 class="font-semibold text-gray-900 dark:text-white">
                        {move || {
                            if editing.get().is_some() { "Edit Teacher" } else { "Add Teacher" }
                        }}
                    </h2>
                    <div class="grid gap-4 md:grid-cols-2">
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="teacher-name">
                                "Full Name"
                            </label>
                            <input
                                id="teacher-name"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="Enter full name"
                                prop:value=move || name.get()
                                on:input=move |event| set_name.set(event_target_value(&event))
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="teacher-role">
                                "Role"
                            </label>
                            <input
                                id="teacher-role"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="e.g. Lead Instructor"
                                prop:value=move || role.get()
                                on:input=move |event| set_role.set(event_target_value(&event))
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="teacher-subject">
                                "Subject"
                            </label>
                            <input
                                id="teacher-subject"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="e.g. Advanced Python"
                                prop:value=move || subject.get()
                                on:input=move |event| set_subject.set(event_target_value(&event))
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="teacher-status">
                                "Employment Type"
                            </label>
                            <select
                                id="teacher-status"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                prop:value=move || status.get()
                                on:change=move |event| set_status.set(event_target_value(&event))
                            >
                                {EMPLOYMENT_TYPES
                                    .into_iter()
                                    .map(|employment_type| {
                                        view! { <option value=employment_type>{employment_type}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="teacher-email">
                                "Email"
                            </label>
                            <input
                                id="teacher-email"
                                type="email"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="name@neevcode.com"
                                prop:value=move || email.get()
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="teacher-phone">
                                "Phone"
                            </label>
                            <input
                                id="teacher-phone"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="+91 ..."
                                prop:value=move || phone.get()
                                on:input=move |event| set_phone.set(event_target_value(&event))
                            />
                        </div>
                    </div>
                    <div class="flex justify-end gap-2">
                        <Button button_type="submit">
                            {move || {
                                if editing.get().is_some() { "Save Changes" } else { "Add Teacher" }
                            }}
                        </Button>
                    </div>
                </form>
            </Show>

            <div class="overflow-hidden rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Name"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Subject"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Status"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Contact"
                            </th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <For
                            each=move || teachers.get()
                            key=|teacher| teacher.id
                            children=move |teacher: Teacher| {
                                let edit_target = teacher.clone();
                                let id = teacher.id;
                                let is_permanent = teacher.status == "Permanent";
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="flex items-center gap-3">
                                                <span class="h-9 w-9 rounded-full bg-purple-100 dark:bg-purple-900/30 text-[#947dc2] flex items-center justify-center text-xs font-semibold">
                                                    {teacher.initials()}
                                                </span>
                                                <div>
                                                    <p class="text-sm font-medium text-gray-900 dark:text-white">
                                                        {teacher.name.clone()}
                                                    </p>
                                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                                        {teacher.role.clone()}
                                                    </p>
                                                </div>
                                            </div>
                                        </td>
                                        <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400">
                                            {teacher.subject.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <span
                                                class="px-2 py-1 rounded-full text-xs font-medium"
                                                class:bg-emerald-50=is_permanent
                                                class:text-emerald-700=is_permanent
                                                class:bg-amber-50=!is_permanent
                                                class:text-amber-700=!is_permanent
                                            >
                                                {teacher.status.clone()}
                                            </span>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                            <p>{teacher.email.clone()}</p>
                                            <p class="text-xs">{teacher.phone.clone()}</p>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                            <button
                                                type="button"
                                                class="text-gray-400 hover:text-gray-900 dark:hover:text-white mr-3"
                                                on:click=move |_| start_editing(&edit_target)
                                            >
                                                <span class="material-symbols-outlined text-base">"edit"</span>
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
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
