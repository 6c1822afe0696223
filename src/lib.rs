//! NeevCode admin dashboard: a client-side rendered Leptos application for
//! managing courses, teachers, expenses, student messages, and site content.
//!
//! Session state is the one cross-cutting concern: an identity backend is
//! projected into a process-wide [`features::session::SessionContext`] through
//! an ordered event stream, and route guards derive their decisions from it.
//! Feature pages own their collections locally and persist best-effort where a
//! backend endpoint exists.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;
