//! Admin dashboard state: inquiries, subscribers and review moderation
//!
//! Each section loads independently; a failed section is reported and shows
//! as empty while the others still populate. Row operations are gated per
//! row, so a double-fired approve or delete results in exactly one backend
//! request.

use crate::editor::ContentEditor;
use crate::report::ErrorReporter;
use fairway_client::ApiClient;
use fairway_core::types::{ContactInquiry, Review, Subscriber};
use fairway_core::{Error, Result};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Debug, Default)]
struct ShellState {
    contacts: Vec<ContactInquiry>,
    subscribers: Vec<Subscriber>,
    pending_reviews: Vec<Review>,
    in_flight: HashSet<String>,
}

/// Releases an in-flight row key when the operation finishes
struct RowGuard<'a> {
    state: &'a Mutex<ShellState>,
    key: String,
}

impl Drop for RowGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.in_flight.remove(&self.key);
        }
    }
}

/// Dashboard over the operator-facing backend collections
pub struct AdminShell {
    client: ApiClient,
    reporter: Arc<dyn ErrorReporter>,
    editor: ContentEditor,
    state: Mutex<ShellState>,
}

impl std::fmt::Debug for AdminShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminShell")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl AdminShell {
    /// Create an empty dashboard; call [`AdminShell::load`] to populate it
    pub fn new(client: ApiClient, reporter: Arc<dyn ErrorReporter>) -> Self {
        let editor = ContentEditor::new(client.clone(), reporter.clone());
        Self {
            client,
            reporter,
            editor,
            state: Mutex::new(ShellState::default()),
        }
    }

    /// The content manager embedded in the dashboard
    pub fn editor(&self) -> &ContentEditor {
        &self.editor
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ShellState>> {
        self.state
            .lock()
            .map_err(|_| Error::Other("dashboard state lock poisoned".to_string()))
    }

    fn begin(&self, key: String) -> Result<RowGuard<'_>> {
        let mut state = self.lock()?;
        if !state.in_flight.insert(key.clone()) {
            return Err(Error::Busy { operation: key });
        }
        drop(state);
        Ok(RowGuard {
            state: &self.state,
            key,
        })
    }

    /// Load all three sections
    ///
    /// Sections fail independently; a failed one is reported and degrades
    /// to an empty list while the others still populate.
    pub async fn load(&self) -> Result<()> {
        let (contacts, subscribers, pending) = tokio::join!(
            self.client.list_contacts(),
            self.client.list_subscribers(),
            self.client.pending_reviews(),
        );

        match contacts {
            Ok(contacts) => {
                debug!(count = contacts.len(), "contact inquiries loaded");
                self.lock()?.contacts = contacts;
            }
            Err(e) => {
                self.reporter.report("load contacts", &e);
                self.lock()?.contacts.clear();
            }
        }
        match subscribers {
            Ok(subscribers) => {
                debug!(count = subscribers.len(), "subscribers loaded");
                self.lock()?.subscribers = subscribers;
            }
            Err(e) => {
                self.reporter.report("load subscribers", &e);
                self.lock()?.subscribers.clear();
            }
        }
        match pending {
            Ok(pending) => {
                debug!(count = pending.len(), "pending reviews loaded");
                self.lock()?.pending_reviews = pending;
            }
            Err(e) => {
                self.reporter.report("load pending reviews", &e);
                self.lock()?.pending_reviews.clear();
            }
        }

        Ok(())
    }

    /// Contact inquiries currently held
    pub fn contacts(&self) -> Vec<ContactInquiry> {
        self.lock().map(|s| s.contacts.clone()).unwrap_or_default()
    }

    /// Newsletter subscribers currently held
    pub fn subscribers(&self) -> Vec<Subscriber> {
        self.lock()
            .map(|s| s.subscribers.clone())
            .unwrap_or_default()
    }

    /// Reviews awaiting moderation
    pub fn pending_reviews(&self) -> Vec<Review> {
        self.lock()
            .map(|s| s.pending_reviews.clone())
            .unwrap_or_default()
    }

    /// Delete a contact inquiry
    ///
    /// The row disappears only after the backend confirms; a failure leaves
    /// the section untouched.
    pub async fn delete_contact(&self, id: &str) -> Result<()> {
        let _guard = self.begin(format!("contact:{id}"))?;

        if let Err(e) = self.client.delete_contact(id).await {
            self.reporter.report("delete contact", &e);
            return Err(e);
        }

        self.lock()?.contacts.retain(|c| c.id != id);
        Ok(())
    }

    /// Delete a newsletter subscriber
    pub async fn delete_subscriber(&self, id: &str) -> Result<()> {
        let _guard = self.begin(format!("subscriber:{id}"))?;

        if let Err(e) = self.client.delete_subscriber(id).await {
            self.reporter.report("delete subscriber", &e);
            return Err(e);
        }

        self.lock()?.subscribers.retain(|s| s.id != id);
        Ok(())
    }

    /// Approve a pending review for public display
    ///
    /// Exactly the targeted row leaves the pending queue; nothing else is
    /// refetched.
    pub async fn approve_review(&self, id: &str) -> Result<()> {
        let _guard = self.begin(format!("review:{id}"))?;

        if let Err(e) = self.client.approve_review(id).await {
            self.reporter.report("approve review", &e);
            return Err(e);
        }

        self.lock()?.pending_reviews.retain(|r| r.id != id);
        Ok(())
    }

    /// Reject a pending review
    pub async fn reject_review(&self, id: &str) -> Result<()> {
        let _guard = self.begin(format!("review:{id}"))?;

        if let Err(e) = self.client.reject_review(id).await {
            self.reporter.report("reject review", &e);
            return Err(e);
        }

        self.lock()?.pending_reviews.retain(|r| r.id != id);
        Ok(())
    }

    /// End the operator's session
    pub async fn logout(&self) -> Result<()> {
        if let Err(e) = self.client.logout().await {
            self.reporter.report("logout", &e);
            return Err(e);
        }
        Ok(())
    }
}
