//! Shared UI components exported for routes and features.

pub mod layout;
pub mod ui;

pub use layout::AppShell;
pub use ui::{Alert, AlertKind, Button, Spinner, ToastProvider, use_toasts};
