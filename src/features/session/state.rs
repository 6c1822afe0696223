//! Session store and provider. The provider owns the application-scope
//! subscription to the session event hub, folds events into reactive state,
//! and performs best-effort profile enrichment.
//!
//! Concurrency contract: events are processed in arrival order, but the
//! enrichment fetch for an event may still be in flight when the next event
//! arrives. The newer event aborts the pending fetch and takes a fresh
//! ticket from the last-event-wins gate, so a stale enrichment result can
//! never overwrite newer session state. The loading gate is cleared exactly
//! once, after the first event of the process lifetime has been fully
//! processed, so guards never act on the uninitialized session.

use crate::components::Spinner;
use crate::features::session::{
    client,
    events::SessionEvents,
    types::{
        FALLBACK_DISPLAY_NAME, Identity, IdentityClaims, ProfileRecord, Session, SessionEvent,
        SignInError, SignInRequest,
    },
};
use crate::app_lib::AppError;
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use futures::future::{AbortHandle, abortable};
use leptos::logging::warn;
use leptos::{prelude::*, task::spawn_local};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

#[derive(Clone, Copy)]
/// Session context shared through Leptos. Readers consume the signals;
/// writes happen only in the provider's event loop and explicit sign-out.
pub struct SessionContext {
    session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
    ready: RwSignal<bool>,
}

impl SessionContext {
    fn new() -> Self {
        let session = RwSignal::new(Session::default());
        let is_authenticated = Signal::derive(move || session.get().is_authenticated());
        Self {
            session,
            is_authenticated,
            ready: RwSignal::new(false),
        }
    }

    /// Reactive view of the current identity.
    pub fn identity(&self) -> Signal<Option<Identity>> {
        let session = self.session;
        Signal::derive(move || session.get().identity)
    }

    /// Synchronous, non-blocking read of the latest known session. May return
    /// the default (absent) session before the first event has arrived.
    pub fn current(&self) -> Session {
        self.session.get_untracked()
    }

    /// True once the first session event has been fully processed.
    pub fn ready(&self) -> Signal<bool> {
        self.ready.into()
    }

    /// Refreshes the display name in place. The identity id never changes
    /// for the lifetime of a session.
    pub fn refresh_display_name(&self, display_name: &str) {
        self.session.update(|session| {
            if let Some(identity) = &mut session.identity {
                identity.display_name = display_name.to_string();
            }
        });
    }

    fn apply(&self, identity: Option<Identity>) {
        self.session.set(Session { identity });
    }

    fn mark_ready(&self) {
        if !self.ready.get_untracked() {
            self.ready.set(true);
        }
    }
}

/// Monotonic ticket counter backing last-event-wins. Each event takes a new
/// ticket; only the holder of the newest ticket may commit a state write.
pub(crate) struct LatestWins {
    current: AtomicU64,
}

impl LatestWins {
    pub(crate) fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
        }
    }

    pub(crate) fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.current.load(Ordering::Acquire) == ticket
    }
}

/// Resolves the final identity from backend claims and the enrichment
/// outcome. The profile document wins when it carries a display name; a
/// failed or empty fetch falls back to the claims' own name, then to the
/// generic placeholder. Fetch failures are logged and otherwise swallowed.
pub(crate) fn resolve_identity(
    claims: IdentityClaims,
    profile: Result<Option<ProfileRecord>, AppError>,
) -> Identity {
    let fallback = claims
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());

    let display_name = match profile {
        Ok(Some(record)) => record
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or(fallback),
        Ok(None) => fallback,
        Err(err) => {
            warn!("profile enrichment failed for {}: {err}", claims.id);
            fallback
        }
    };

    Identity {
        id: claims.id,
        display_name,
        email: claims.email,
    }
}

#[derive(Clone)]
struct SessionWorker {
    ctx: SessionContext,
    gate: Arc<LatestWins>,
    pending: Arc<Mutex<Option<AbortHandle>>>,
}

impl SessionWorker {
    fn new(ctx: SessionContext) -> Self {
        Self {
            ctx,
            gate: Arc::new(LatestWins::new()),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    async fn run(self, mut stream: UnboundedReceiver<SessionEvent>) {
        while let Some(event) = stream.next().await {
            self.dispatch(event);
        }
        // Stream termination means the hub (or our subscription) is gone;
        // treat it as an implicit sign-out.
        self.ctx.apply(None);
    }

    fn dispatch(&self, event: SessionEvent) {
        self.abort_pending();
        let ticket = self.gate.begin();

        match event {
            SessionEvent::SignedOut => {
                self.ctx.apply(None);
                self.ctx.mark_ready();
            }
            SessionEvent::SignedIn(claims) => {
                let (fetch, handle) = abortable(client::fetch_profile(claims.id.clone()));
                if let Ok(mut pending) = self.pending.lock() {
                    *pending = Some(handle);
                }

                let worker = self.clone();
                spawn_local(async move {
                    let profile = match fetch.await {
                        Ok(result) => result,
                        // Superseded by a newer event; that event settles state.
                        Err(_aborted) => {
                            worker.ctx.mark_ready();
                            return;
                        }
                    };
                    if worker.gate.is_current(ticket) {
                        worker.ctx.apply(Some(resolve_identity(claims, profile)));
                    }
                    worker.ctx.mark_ready();
                });
            }
        }
    }

    fn abort_pending(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

/// Asks the backend for the current session and feeds the answer through the
/// event pipeline. A hydration failure is an implicit sign-out.
async fn hydrate(events: SessionEvents) {
    match client::fetch_session().await {
        Ok(Some(claims)) => events.emit(SessionEvent::SignedIn(claims)),
        Ok(None) => events.emit(SessionEvent::SignedOut),
        Err(err) => {
            warn!("session hydration failed, treating as signed out: {err}");
            events.emit(SessionEvent::SignedOut);
        }
    }
}

/// Authenticates against the identity backend. Success is announced through
/// the event hub; the store picks it up like any other session transition.
pub async fn sign_in(
    events: &SessionEvents,
    email: &str,
    password: &str,
) -> Result<(), SignInError> {
    let request = SignInRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let claims = client::sign_in(&request)
        .await
        .map_err(|err| SignInError::classify(&err))?;
    events.emit(SessionEvent::SignedIn(claims));
    Ok(())
}

/// Requests backend sign-out and clears local session state regardless of
/// the outcome. A backend failure is returned so the caller can surface it
/// as a warning; it must not keep the UI in an authenticated-looking state.
pub async fn sign_out(events: &SessionEvents) -> Result<(), AppError> {
    conclude_sign_out(events, client::sign_out().await)
}

pub(crate) fn conclude_sign_out(
    events: &SessionEvents,
    backend_result: Result<(), AppError>,
) -> Result<(), AppError> {
    if let Err(err) = &backend_result {
        warn!("backend sign-out failed, clearing local session anyway: {err}");
    }
    events.emit(SessionEvent::SignedOut);
    backend_result
}

/// Provides the session context and event hub, hydrates the session once,
/// and holds child rendering until the first event has been processed.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let ctx = SessionContext::new();
    let events = SessionEvents::new();
    provide_context(ctx);
    provide_context(events.clone());

    let (subscription, stream) = events.subscribe();
    let worker = SessionWorker::new(ctx);
    spawn_local(worker.run(stream));
    spawn_local(hydrate(events));
    on_cleanup(move || drop(subscription));

    let ready = ctx.ready();
    view! {
        <Show
            when=move || ready.get()
            fallback=|| {
                view! {
                    <div class="min-h-screen flex items-center justify-center">
                        <Spinner />
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::new)
}

/// Returns the session event hub provided at the application scope.
pub fn use_session_events() -> SessionEvents {
    use_context::<SessionEvents>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(id: &str, display_name: Option<&str>) -> IdentityClaims {
        IdentityClaims {
            id: id.to_string(),
            email: format!("{id}@x.com"),
            display_name: display_name.map(str::to_string),
        }
    }

    #[test]
    fn profile_document_supplies_missing_display_name() {
        let profile = Ok(Some(ProfileRecord {
            display_name: Some("Alice".to_string()),
            email: None,
        }));
        let identity = resolve_identity(claims("u1", None), profile);
        assert_eq!(identity.display_name, "Alice");
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.email, "u1@x.com");
    }

    #[test]
    fn enrichment_failure_falls_back_to_placeholder() {
        let profile = Err(AppError::Network("offline".to_string()));
        let identity = resolve_identity(claims("u1", None), profile);
        assert_eq!(identity.display_name, FALLBACK_DISPLAY_NAME);
    }

    #[test]
    fn enrichment_failure_keeps_backend_display_name() {
        let profile = Err(AppError::Network("offline".to_string()));
        let identity = resolve_identity(claims("u1", Some("Backend Name")), profile);
        assert_eq!(identity.display_name, "Backend Name");
    }

    #[test]
    fn missing_document_falls_back_to_claims_then_placeholder() {
        let identity = resolve_identity(claims("u1", Some("Claimed")), Ok(None));
        assert_eq!(identity.display_name, "Claimed");

        let identity = resolve_identity(claims("u1", None), Ok(None));
        assert_eq!(identity.display_name, FALLBACK_DISPLAY_NAME);
    }

    #[test]
    fn blank_names_are_treated_as_missing() {
        let profile = Ok(Some(ProfileRecord {
            display_name: Some("   ".to_string()),
            email: None,
        }));
        let identity = resolve_identity(claims("u1", Some("  ")), profile);
        assert_eq!(identity.display_name, FALLBACK_DISPLAY_NAME);
    }

    #[test]
    fn superseded_ticket_cannot_commit() {
        let gate = LatestWins::new();
        let first = gate.begin();
        assert!(gate.is_current(first));

        // A second event arrives while the first enrichment is in flight.
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn sign_out_clears_locally_when_backend_succeeds() {
        let events = SessionEvents::new();
        let (_guard, mut stream) = events.subscribe();

        let result = conclude_sign_out(&events, Ok(()));
        assert!(result.is_ok());
        assert_eq!(
            stream.try_next().expect("event").expect("open"),
            SessionEvent::SignedOut
        );
    }

    #[test]
    fn sign_out_clears_locally_when_backend_fails() {
        let events = SessionEvents::new();
        let (_guard, mut stream) = events.subscribe();

        let backend_failure = AppError::Http {
            status: 501,
            message: "not implemented".to_string(),
        };
        let result = conclude_sign_out(&events, Err(backend_failure));
        assert!(result.is_err());
        assert_eq!(
            stream.try_next().expect("event").expect("open"),
            SessionEvent::SignedOut
        );
    }
}
