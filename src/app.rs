use crate::components::ToastProvider;
use crate::features::session::SessionProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <SessionProvider>
                <Router>
                    <AppRoutes />
                </Router>
            </SessionProvider>
        </ToastProvider>
    }
}
