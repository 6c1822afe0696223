mod content;
mod courses;
mod dashboard;
mod expenses;
mod login;
mod messages;
mod not_found;
mod profile;
mod teachers;

pub(crate) use content::ContentPage;
pub(crate) use courses::CoursesPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use expenses::ExpensesPage;
pub(crate) use login::LoginPage;
pub(crate) use messages::MessagesPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use teachers::TeachersPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths, shared with the guard and navigation chrome.
pub mod paths {
    pub const DASHBOARD: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const COURSES: &str = "/courses";
    pub const TEACHERS: &str = "/teachers";
    pub const MESSAGES: &str = "/messages";
    pub const EXPENSES: &str = "/expenses";
    pub const CONTENT: &str = "/content";
    pub const PROFILE: &str = "/profile";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/courses") view=CoursesPage />
            <Route path=path!("/teachers") view=TeachersPage />
            <Route path=path!("/messages") view=MessagesPage />
            <Route path=path!("/expenses") view=ExpensesPage />
            <Route path=path!("/content") view=ContentPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
