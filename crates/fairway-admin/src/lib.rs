//! Admin tooling for the Fairway Concierge backend
//!
//! [`ContentEditor`] drives the five partner collections, [`AdminShell`]
//! holds the dashboard sections, and [`ErrorReporter`] is the seam through
//! which both surface failures.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod editor;
pub mod report;
pub mod shell;

pub use editor::ContentEditor;
pub use report::{ErrorReporter, TracingReporter};
pub use shell::AdminShell;
