//! Error reporting seam for the admin surfaces
//!
//! The editor and the dashboard never print or swallow failures themselves;
//! they hand each one to an injected reporter. The default reporter logs
//! through `tracing`, tests swap in a recording one.

use fairway_core::Error;
use tracing::error;

/// Sink for operational failures that should reach the operator
pub trait ErrorReporter: Send + Sync {
    /// Report a failed operation together with where it happened
    fn report(&self, context: &str, error: &Error);
}

/// Reporter that forwards every failure to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, context: &str, error: &Error) {
        error!(context, %error, "operation failed");
    }
}
