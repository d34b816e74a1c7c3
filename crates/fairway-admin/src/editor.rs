//! Generic content editor over the partner collections
//!
//! One editor drives all five listing types through the partner-type
//! registry. Every fetched list lands in a slot keyed by its own partner
//! type, so a slow response for a previously selected tab can never clobber
//! the tab the operator is looking at now.

use crate::report::ErrorReporter;
use fairway_client::ApiClient;
use fairway_core::utils::{matches_query, slugify};
use fairway_core::{Error, Partner, PartnerType, Result};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Debug)]
struct EditorState {
    active: PartnerType,
    lists: HashMap<PartnerType, Vec<Partner>>,
    query: String,
    in_flight: HashSet<String>,
}

/// Releases an in-flight row key when the operation finishes
struct RowGuard<'a> {
    state: &'a Mutex<EditorState>,
    key: String,
}

impl Drop for RowGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.in_flight.remove(&self.key);
        }
    }
}

/// Editor for the partner listings behind the admin content manager
pub struct ContentEditor {
    client: ApiClient,
    reporter: Arc<dyn ErrorReporter>,
    state: Mutex<EditorState>,
}

impl std::fmt::Debug for ContentEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentEditor")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl ContentEditor {
    /// Create an editor starting on the first tab
    pub fn new(client: ApiClient, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            client,
            reporter,
            state: Mutex::new(EditorState {
                active: PartnerType::Golf,
                lists: HashMap::new(),
                query: String::new(),
                in_flight: HashSet::new(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, EditorState>> {
        self.state
            .lock()
            .map_err(|_| Error::Other("editor state lock poisoned".to_string()))
    }

    fn begin(&self, key: impl Into<String>) -> Result<RowGuard<'_>> {
        let key = key.into();
        let mut state = self.lock()?;
        if !state.in_flight.insert(key.clone()) {
            return Err(Error::Busy { operation: key });
        }
        Ok(RowGuard {
            state: &self.state,
            key,
        })
    }

    /// The currently selected partner type
    pub fn active(&self) -> PartnerType {
        self.lock().map_or(PartnerType::Golf, |state| state.active)
    }

    /// Switch to another tab and refresh its listing
    ///
    /// The previous tab's slot is left untouched, including any response for
    /// it that is still on the wire.
    pub async fn select(&self, partner_type: PartnerType) -> Result<()> {
        {
            let mut state = self.lock()?;
            state.active = partner_type;
        }
        self.refresh_slot(partner_type).await
    }

    /// Refresh the active tab's listing
    pub async fn refresh(&self) -> Result<()> {
        let active = self.active();
        self.refresh_slot(active).await
    }

    /// Fetch one type's listing into its own slot
    ///
    /// A failed fetch is reported and degrades the slot to an empty listing
    /// rather than propagating; the caller only sees an error when the
    /// editor state itself is unusable.
    async fn refresh_slot(&self, partner_type: PartnerType) -> Result<()> {
        match self.client.list_partners(partner_type).await {
            Ok(partners) => {
                debug!(
                    partner_type = %partner_type,
                    count = partners.len(),
                    "listing refreshed"
                );
                self.lock()?.lists.insert(partner_type, partners);
            }
            Err(e) => {
                self.reporter
                    .report(&format!("refresh {partner_type}"), &e);
                self.lock()?.lists.insert(partner_type, Vec::new());
            }
        }
        Ok(())
    }

    /// All entries currently held for one type
    pub fn entries_for(&self, partner_type: PartnerType) -> Vec<Partner> {
        self.lock()
            .map(|state| state.lists.get(&partner_type).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// All entries on the active tab
    pub fn entries(&self) -> Vec<Partner> {
        self.entries_for(self.active())
    }

    /// Set the search filter
    pub fn set_query(&self, query: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.query = query.into();
        }
    }

    /// Entries on the active tab matching the search filter
    ///
    /// The filter matches case-insensitively against name, location and the
    /// `category` attribute. An empty filter shows everything.
    pub fn visible(&self) -> Vec<Partner> {
        let Ok(state) = self.state.lock() else {
            return Vec::new();
        };
        let query = state.query.clone();
        let entries = state.lists.get(&state.active).cloned().unwrap_or_default();
        drop(state);

        entries
            .into_iter()
            .filter(|p| {
                matches_query(&p.name, &query)
                    || matches_query(&p.location, &query)
                    || p.category().is_some_and(|c| matches_query(c, &query))
            })
            .collect()
    }

    /// Reject deal text on a type whose listings do not carry deals
    fn check_deal(partner_type: PartnerType, partner: &Partner) -> Result<()> {
        if !partner_type.descriptor().has_deal && partner.deal.is_some() {
            return Err(Error::Validation {
                field: "deal".to_string(),
                message: format!("{partner_type} listings do not carry deal text"),
            });
        }
        Ok(())
    }

    /// Create a new listing on the active tab
    ///
    /// An empty id is derived from the name. Duplicate ids and deal text on
    /// a type without deals are rejected before anything goes on the wire.
    /// The listing is refetched after the backend accepts the new entry.
    pub async fn create(&self, mut partner: Partner) -> Result<()> {
        let active = self.active();

        if partner.id.is_empty() {
            partner.id = slugify(&partner.name);
        }
        if partner.id.is_empty() {
            return Err(Error::Validation {
                field: "id".to_string(),
                message: "an id or a name to derive one from is required".to_string(),
            });
        }
        Self::check_deal(active, &partner)?;
        {
            let state = self.lock()?;
            let duplicate = state
                .lists
                .get(&active)
                .is_some_and(|list| list.iter().any(|p| p.id == partner.id));
            if duplicate {
                return Err(Error::Validation {
                    field: "id".to_string(),
                    message: format!("id '{}' already exists", partner.id),
                });
            }
        }

        let _guard = self.begin(format!("create {active}"))?;
        if let Err(e) = self.client.create_partner(active, &partner).await {
            self.reporter.report(&format!("create {active}"), &e);
            return Err(e);
        }
        self.refresh_slot(active).await
    }

    /// Update an existing listing on the active tab
    ///
    /// The id names the row and cannot be changed through an update; the
    /// entry must already be present in the current listing. Deal text is
    /// checked against the type the same way creation checks it.
    pub async fn update(&self, partner: Partner) -> Result<()> {
        let active = self.active();
        Self::check_deal(active, &partner)?;

        let known = {
            let state = self.lock()?;
            state
                .lists
                .get(&active)
                .is_some_and(|list| list.iter().any(|p| p.id == partner.id))
        };
        if !known {
            return Err(Error::NotFound {
                resource: format!("{active} listing '{}'", partner.id),
            });
        }

        let _guard = self.begin(partner.id.clone())?;
        if let Err(e) = self.client.update_partner(active, &partner).await {
            self.reporter.report(&format!("update {active}"), &e);
            return Err(e);
        }
        self.refresh_slot(active).await
    }

    /// Delete a listing from the active tab
    ///
    /// The row stays in place until the backend confirms the deletion; a
    /// failure leaves the listing exactly as it was.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let active = self.active();
        let _guard = self.begin(id.to_string())?;

        if let Err(e) = self.client.delete_partner(active, id).await {
            self.reporter.report(&format!("delete {active}"), &e);
            return Err(e);
        }
        self.refresh_slot(active).await
    }
}
