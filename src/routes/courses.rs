//! Course management. The list lives in memory and is the source of truth
//! for rendering; every mutation is additionally pushed to the course API
//! fire-and-forget, with the outcome surfaced as a toast. There is no
//! optimistic rollback: a failed sync leaves the local edit in place.

use crate::components::{AppShell, Button, use_toasts};
use crate::features::courses::{client, types, types::Course};
use crate::features::records::{next_id, remove, upsert};
use crate::features::session::RequireSession;
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <CoursesContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn CoursesContent() -> impl IntoView {
    let toasts = use_toasts();
    let courses = RwSignal::new(types::seed());

    // Replace the seed with the persisted list when the API answers.
    spawn_local(async move {
        match client::fetch_courses().await {
            Ok(list) => courses.set(list),
            Err(err) => {
                warn!("course list fetch failed, keeping local list: {err}");
            }
        }
    });

    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<u32>);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());
    let curriculum = RwSignal::new(Vec::<String>::new());
    let (topic_input, set_topic_input) = signal(String::new());

    let reset_form = move || {
        editing.set(None);
        set_name.set(String::new());
        set_description.set(String::new());
        set_price.set(String::new());
        set_image_url.set(String::new());
        curriculum.set(Vec::new());
        set_topic_input.set(String::new());
        set_show_form.set(false);
    };

    let start_editing = move |course: &Course| {
        editing.set(Some(course.id));
        set_name.set(course.name.clone());
        set_description.set(course.description.clone());
        set_price.set(course.price.to_string());
        set_image_url.set(course.image_url.clone());
        curriculum.set(course.curriculum.clone());
        set_topic_input.set(String::new());
        set_show_form.set(true);
    };

    let add_topic = move |_| {
        let topic = topic_input.get_untracked().trim().to_string();
        if !topic.is_empty() {
            curriculum.update(|topics| topics.push(topic));
            set_topic_input.set(String::new());
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let name_value = name.get_untracked().trim().to_string();
        let description_value = description.get_untracked().trim().to_string();
        let image_value = image_url.get_untracked().trim().to_string();
        if name_value.is_empty() || description_value.is_empty() || image_value.is_empty() {
            toasts.error("Missing details", "Name, description, and image are required.");
            return;
        }
        let Ok(price_value) = price.get_untracked().trim().parse::<u32>() else {
            toasts.error("Invalid price", "The price must be a whole number of rupees.");
            return;
        };

        let id = editing
            .get_untracked()
            .unwrap_or_else(|| next_id(&courses.get_untracked()));
        let course = Course {
            id,
            name: name_value,
            description: description_value,
            price: price_value,
            image_url: image_value,
            curriculum: curriculum.get_untracked(),
        };

        courses.update(|list| upsert(list, course.clone()));
        reset_form();

        spawn_local(async move {
            match client::save_course(&course).await {
                Ok(()) => toasts.success("Course saved", &course.name),
                Err(err) => {
                    warn!("course save failed for {}: {err}", course.id);
                    toasts.error(
                        "Saved locally only",
                        &format!("The server did not accept the change: {err}"),
                    );
                }
            }
        });
    };

    let delete = move |id: u32| {
        courses.update(|list| remove(list, id));
        spawn_local(async move {
            match client::delete_course(id).await {
                Ok(()) => toasts.success("Course deleted", ""),
                Err(err) => {
                    warn!("course delete failed for {id}: {err}");
                    toasts.error(
                        "Deleted locally only",
                        &format!("The server did not accept the deletion: {err}"),
                    );
                }
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                    "Courses"
                </h1>
                <Button on:click=move |_| {
                    if show_form.get_untracked() {
                        reset_form();
                    } else {
                        set_show_form.set(true);
                    }
                }>
                    {move || if show_form.get() { "Cancel" } else { "Add New Course" }}
                </Button>
            </div>

            <Show when=move || show_form.get()>
                <form
                    class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4"
                    on:submit=on_submit
                >
                    <h2 class="font-semibold text-gray-900 dark:text-white">
                        {move || {
                            if editing.get().is_some() { "Edit Course" } else { "Add New Course" }
                        }}
                    </h2>
                    <div class="grid gap-4 md:grid-cols-2">
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="course-name">
                                "Course Name"
                            </label>
                            <input
                                id="course-name"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="Enter course name"
                                prop:value=move || name.get()
                                on:input=move |event| set_name.set(event_target_value(&event))
                            />
                        </div>
                        <div class="space-y-2">
                            <label class="block text-sm font-medium text-gray-900 dark:text-white" for="course-price">
                                "Price (₹)"
                            </label>
                            <input
                                id="course-price"
                                type="number"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="Enter course price"
                                prop:value=move || price.get()
                                on:input=move |event| set_price.set(event_target_value(&event))
                            />
                        </div>
                    </div>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium text-gray-900 dark:text-white" for="course-description">
                            "Description"
                        </label>
                        <textarea
                            id="course-description"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            rows="3"
                            placeholder="Enter course description"
                            prop:value=move || description.get()
                            on:input=move |event| set_description.set(event_target_value(&event))
                        ></textarea>
                    </div>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium text-gray-900 dark:text-white" for="course-image">
                            "Image URL"
                        </label>
                        <input
                            id="course-image"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            placeholder="Enter image URL"
                            prop:value=move || image_url.get()
                            on:input=move |event| set_image_url.set(event_target_value(&event))
                        />
                    </div>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium text-gray-900 dark:text-white">
                            "Curriculum Topics"
                        </label>
                        <div class="flex gap-2">
                            <input
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                placeholder="Add a topic"
                                prop:value=move || topic_input.get()
                                on:input=move |event| set_topic_input.set(event_target_value(&event))
                            />
                            <Button on:click=add_topic>"Add Topic"</Button>
                        </div>
                        <ul class="list-disc list-inside space-y-1">
                            {move || {
                                curriculum
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, topic)| {
                                        view! {
                                            <li class="text-sm text-gray-700 dark:text-gray-300">
                                                {topic}
                                                <button
                                                    type="button"
                                                    class="ml-2 text-gray-400 hover:text-red-500"
                                                    on:click=move |_| {
                                                        curriculum
                                                            .update(|topics| {
                                                                topics.remove(index);
                                                            })
                                                    }
                                                >
                                                    "×"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                    <div class="flex justify-end gap-2">
                        <Button button_type="submit">
                            {move || {
                                if editing.get().is_some() { "Save Changes" } else { "Add Course" }
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
                                "Course Name"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Description"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Price"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Topics"
                            </th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <For
                            each=move || courses.get()
                            key=|course| course.id
                            children=move |course: Course| {
                                let edit_target = course.clone();
                                let id = course.id;
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                        <td class="px-6 py-4 text-sm font-medium text-gray-900 dark:text-white">
                                            {course.name.clone()}
                                        </td>
                                        <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400">
                                            {course.description.clone()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                                            {format!("₹{}", course.price)}
                                        </td>
                                        <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400">
                                            {course.curriculum.join(", ")}
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
