//! OAuth callback handling and session bootstrap
//!
//! After the provider redirects back, the one-time token travels in the URL
//! hash fragment as `session_id=...`. The bootstrap exchanges that token for
//! a cookie-backed session exactly once, no matter how many times the caller
//! re-enters the flow.

use crate::api::ApiClient;
use fairway_core::AdminUser;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Extract the one-time session token from a URL hash fragment
///
/// Accepts the fragment with or without its leading `#`. Returns `None` when
/// the fragment carries no `session_id` or an empty one. The parameter name
/// must be exactly `session_id`; lookalike names such as `x_session_id` do
/// not carry our token and are ignored.
pub fn extract_session_id(fragment: &str) -> Option<&str> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    for pair in fragment.split('&') {
        if let Some(value) = pair.strip_prefix("session_id=") {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    None
}

/// Result of the one-time token exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The token was valid and a session now exists
    Authenticated {
        /// The operator the session belongs to
        user: AdminUser,
        /// Whether the caller should land on the admin surface
        open_admin: bool,
    },
    /// No token was present, or the exchange failed
    Unauthenticated,
}

/// Where the bootstrap currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    /// The fragment has not been inspected yet
    Detecting,
    /// An exchange request is in flight
    Exchanging,
    /// The bootstrap finished with this outcome
    Done(BootstrapOutcome),
}

/// One-shot session bootstrap for an OAuth callback fragment
///
/// `run` is safe to call repeatedly and concurrently; the token exchange
/// happens at most once and every caller observes the same outcome.
#[derive(Debug)]
pub struct SessionBootstrap {
    fragment: String,
    exchange_started: AtomicBool,
    outcome: OnceCell<BootstrapOutcome>,
}

impl SessionBootstrap {
    /// Create a bootstrap for the given callback fragment
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            exchange_started: AtomicBool::new(false),
            outcome: OnceCell::new(),
        }
    }

    /// Run the bootstrap, exchanging the token on the first call only
    ///
    /// A failed exchange is reported through the log and collapses to
    /// `Unauthenticated`; the caller is simply not signed in.
    pub async fn run(&self, client: &ApiClient) -> BootstrapOutcome {
        self.outcome
            .get_or_init(|| async {
                let Some(session_id) = extract_session_id(&self.fragment) else {
                    info!("no session token in callback fragment");
                    return BootstrapOutcome::Unauthenticated;
                };

                self.exchange_started.store(true, Ordering::SeqCst);

                match client.exchange_session(session_id).await {
                    Ok(user) => {
                        info!(email = %user.email, "session established");
                        BootstrapOutcome::Authenticated {
                            user,
                            open_admin: true,
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "session exchange failed");
                        BootstrapOutcome::Unauthenticated
                    }
                }
            })
            .await
            .clone()
    }

    /// Current state of the bootstrap
    pub fn state(&self) -> BootstrapState {
        if let Some(outcome) = self.outcome.get() {
            BootstrapState::Done(outcome.clone())
        } else if self.exchange_started.load(Ordering::SeqCst) {
            BootstrapState::Exchanging
        } else {
            BootstrapState::Detecting
        }
    }
}

/// Hand-off slot carrying the bootstrap outcome to whatever screen comes next
///
/// The outcome can be taken exactly once, so a later refresh of the same
/// screen cannot replay the sign-in.
#[derive(Debug, Default)]
pub struct NavigationState {
    slot: Mutex<Option<BootstrapOutcome>>,
}

impl NavigationState {
    /// Create an empty hand-off slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an outcome for the next screen to pick up
    pub fn hand_off(&self, outcome: BootstrapOutcome) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(outcome);
        }
    }

    /// Take the stored outcome, leaving the slot empty
    pub fn take(&self) -> Option<BootstrapOutcome> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }
}
