use async_trait::async_trait;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::CreateEntryCommand;
use crate::catalog::models::Entry;
use crate::catalog::models::EntryId;
use crate::catalog::models::EntryKind;
use crate::catalog::models::UpdateEntryCommand;

/// Port for catalog domain service operations.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// Create a new entry of the given kind.
    async fn create_entry(&self, command: CreateEntryCommand) -> Result<Entry, CatalogError>;

    /// Retrieve an entry addressed by kind and ID.
    ///
    /// An existing entry addressed under the wrong kind is reported as
    /// `NotFound`, not exposed across kinds.
    async fn get_entry(&self, kind: EntryKind, id: &EntryId) -> Result<Entry, CatalogError>;

    /// List all entries of one kind, newest first.
    async fn list_entries(&self, kind: EntryKind) -> Result<Vec<Entry>, CatalogError>;

    /// Apply a partial update to an entry.
    ///
    /// # Errors
    /// * `NotFound` - entry does not exist under this kind
    async fn update_entry(
        &self,
        kind: EntryKind,
        id: &EntryId,
        command: UpdateEntryCommand,
    ) -> Result<Entry, CatalogError>;

    /// Delete an entry.
    ///
    /// # Errors
    /// * `NotFound` - entry does not exist under this kind
    async fn delete_entry(&self, kind: EntryKind, id: &EntryId) -> Result<(), CatalogError>;
}

/// Persistence operations for catalog entries.
#[async_trait]
pub trait EntryRepository: Send + Sync + 'static {
    async fn insert(&self, entry: Entry) -> Result<Entry, CatalogError>;

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, CatalogError>;

    async fn list_by_kind(&self, kind: EntryKind) -> Result<Vec<Entry>, CatalogError>;

    async fn update(&self, entry: Entry) -> Result<Entry, CatalogError>;

    async fn delete(&self, id: &EntryId) -> Result<bool, CatalogError>;
}
