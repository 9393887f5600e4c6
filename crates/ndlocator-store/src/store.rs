//! The reseller store: an in-memory mirror of the remote collection.
//!
//! Failure policy per operation kind, kept explicit so the contract stays
//! testable:
//!
//! | operation  | on remote failure                                      |
//! |------------|--------------------------------------------------------|
//! | `fetch_all`| log a warning, substitute the fallback dataset, Ok     |
//! | `create`   | set `error`, propagate to the caller                   |
//! | `update`   | set `error`, propagate to the caller                   |
//! | `delete`   | set `error`, propagate to the caller                   |
//!
//! A read failure degrades to a usable demo dataset so the map is never
//! empty; a write failure must be visible to the user who initiated it.

use ndlocator_core::{NewReseller, Reseller, ResellerPatch};

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::fallback::fallback_resellers;
use crate::wire::{NewResellerRow, PatchRow, ResellerRow};

/// Which dataset a [`ResellerStore::fetch_all`] ended up serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The remote answered; records mirror the remote collection.
    Remote,
    /// The remote failed; records are the static fallback dataset.
    Fallback,
}

/// Canonical in-memory copy of the reseller list.
///
/// All mutation goes through the store's own methods; callers read snapshots
/// via [`ResellerStore::records`]. Racing updates are last-write-wins, which
/// is adequate for a single logical writer.
pub struct ResellerStore {
    client: RecordClient,
    records: Vec<Reseller>,
    loading: bool,
    error: Option<String>,
}

impl ResellerStore {
    #[must_use]
    pub fn new(client: RecordClient) -> Self {
        Self {
            client,
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Reseller] {
        &self.records
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the in-memory list with the remote collection, or with the
    /// fallback dataset if the remote fails.
    ///
    /// The substitution is a full replacement, never a merge. The failure is
    /// swallowed — `error` stays unset — and reported only through the
    /// returned [`FetchOutcome`].
    pub async fn fetch_all(&mut self) -> FetchOutcome {
        self.loading = true;
        self.error = None;

        let outcome = match self.client.select_all().await {
            Ok(rows) => {
                self.records = rows.into_iter().map(ResellerRow::into_domain).collect();
                FetchOutcome::Remote
            }
            Err(error) => {
                tracing::warn!(%error, "remote fetch failed, substituting fallback dataset");
                self.records = fallback_resellers();
                FetchOutcome::Fallback
            }
        };

        self.loading = false;
        outcome
    }

    /// Creates a record remotely and appends the server-assigned row.
    ///
    /// # Errors
    ///
    /// Remote failures set the store's `error` and propagate; the local list
    /// is left unchanged (nothing was applied speculatively).
    pub async fn create(&mut self, new: &NewReseller) -> Result<Reseller, StoreError> {
        match self.client.insert_one(&NewResellerRow::from(new)).await {
            Ok(row) => {
                let created = row.into_domain();
                self.records.push(created.clone());
                Ok(created)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Applies a partial update remotely and replaces the matching local
    /// record wholesale with the server's representation.
    ///
    /// # Errors
    ///
    /// Remote failures set the store's `error` and propagate.
    pub async fn update(&mut self, id: i64, patch: &ResellerPatch) -> Result<Reseller, StoreError> {
        match self.client.update_by_id(id, &PatchRow::from(patch)).await {
            Ok(row) => {
                let updated = row.into_domain();
                if let Some(slot) = self.records.iter_mut().find(|r| r.id == id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Deletes a record remotely, then filters it out locally.
    ///
    /// Deleting an id that does not exist is a local no-op; whatever the
    /// remote reported is still propagated as the result.
    ///
    /// # Errors
    ///
    /// Remote failures set the store's `error` and propagate.
    pub async fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        match self.client.delete_by_id(id).await {
            Ok(()) => {
                self.records.retain(|r| r.id != id);
                Ok(())
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }
}
