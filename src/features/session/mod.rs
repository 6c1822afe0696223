//! Session feature: the single source of truth for "who is logged in".
//!
//! The identity backend is projected into local state through an ordered
//! event stream: sign-in, sign-out, and startup hydration all emit a
//! [`SessionEvent`] into the [`SessionEvents`] hub, and the provider in
//! [`state`] folds those events into the process-wide [`SessionContext`].
//! Identity enrichment (the profile-document fetch) is best-effort and
//! last-event-wins; a newer event aborts and invalidates an in-flight fetch.
//! Route access decisions live in [`guard`] and are pure over the resolved
//! session state.

pub mod client;
pub mod events;
pub mod guard;
pub mod state;
pub mod types;

pub use events::{SessionEvents, Subscription};
pub use guard::{RedirectIfSignedIn, RequireSession, RouteDecision};
pub use state::{SessionContext, SessionProvider, sign_in, sign_out, use_session};
pub use types::{Identity, IdentityClaims, ProfileRecord, Session, SessionEvent, SignInError};
