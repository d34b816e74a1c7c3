//! Async client for the Fairway Concierge backend
//!
//! This crate wraps every backend endpoint behind [`ApiClient`] and carries
//! the OAuth callback bootstrap that turns a one-time token into a
//! cookie-backed session.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod session;

pub use api::ApiClient;
pub use session::{
    extract_session_id, BootstrapOutcome, BootstrapState, NavigationState, SessionBootstrap,
};
