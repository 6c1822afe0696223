use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button
            type=button_type
            class="text-white bg-[#947dc2] hover:bg-[#8269b5] focus:ring-4 focus:outline-none focus:ring-purple-200 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-[#947dc2] dark:hover:bg-[#8269b5] dark:focus:ring-purple-900"
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
