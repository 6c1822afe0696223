//! Transient toast notifications. Feature pages report best-effort outcomes
//! here (saves, deletions, sign-out discrepancies); nothing rendered through
//! a toast may contain secrets.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen.
const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

#[derive(Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    title: String,
    description: String,
}

#[derive(Clone, Copy)]
/// Toast queue shared through Leptos.
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(ToastKind::Error, title, description);
    }

    pub fn warning(&self, title: &str, description: &str) {
        self.push(ToastKind::Warning, title, description);
    }

    fn push(&self, kind: ToastKind, title: &str, description: &str) {
        let id = {
            self.next_id.update_value(|next| *next += 1);
            self.next_id.get_value()
        };
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                title: title.to_string(),
                description: description.to_string(),
            });
        });

        let items = self.items;
        Timeout::new(DISMISS_AFTER_MS, move || {
            items.update(|items| items.retain(|toast| toast.id != id));
        })
        .forget();
    }
}

/// Provides the toast queue and renders the stacked notifications.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    let items = toasts.items;
    view! {
        {children()}
        <div class="fixed top-4 right-4 z-50 space-y-2 w-80" aria-live="polite">
            <For each=move || items.get() key=|toast| toast.id let:toast>
                <ToastCard toast=toast />
            </For>
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let Toast {
        kind,
        title,
        description,
        ..
    } = toast;
    let accent = match kind {
        ToastKind::Success => "border-l-4 border-emerald-500",
        ToastKind::Error => "border-l-4 border-red-500",
        ToastKind::Warning => "border-l-4 border-amber-500",
    };
    let class = format!("rounded-lg bg-white dark:bg-gray-800 shadow-lg px-4 py-3 {accent}");
    let has_description = !description.is_empty();

    view! {
        <div class=class role="status">
            <p class="text-sm font-semibold text-gray-900 dark:text-white">{title}</p>
            <Show when=move || has_description>
                <p class="text-sm text-gray-500 dark:text-gray-400">{description.clone()}</p>
            </Show>
        </div>
    }
}

/// Returns the toast queue or a detached fallback queue.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}
