use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::CreateEntryCommand;
use crate::catalog::models::Entry;
use crate::catalog::models::EntryId;
use crate::catalog::models::EntryKind;
use crate::catalog::models::UpdateEntryCommand;
use crate::catalog::ports::CatalogServicePort;
use crate::catalog::ports::EntryRepository;

/// Domain service implementation for catalog operations.
///
/// One generic service covers every entry kind; kind-specific data lives in
/// the entry's attribute document.
pub struct CatalogService<ER>
where
    ER: EntryRepository,
{
    repository: Arc<ER>,
}

impl<ER> CatalogService<ER>
where
    ER: EntryRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }

    async fn find_under_kind(
        &self,
        kind: EntryKind,
        id: &EntryId,
    ) -> Result<Entry, CatalogError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|entry| entry.kind == kind)
            .ok_or(CatalogError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<ER> CatalogServicePort for CatalogService<ER>
where
    ER: EntryRepository,
{
    async fn create_entry(&self, command: CreateEntryCommand) -> Result<Entry, CatalogError> {
        let now = Utc::now();
        let entry = Entry {
            id: EntryId::new(),
            kind: command.kind,
            name: command.name,
            description: command.description,
            attributes: command.attributes,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(entry).await
    }

    async fn get_entry(&self, kind: EntryKind, id: &EntryId) -> Result<Entry, CatalogError> {
        self.find_under_kind(kind, id).await
    }

    async fn list_entries(&self, kind: EntryKind) -> Result<Vec<Entry>, CatalogError> {
        self.repository.list_by_kind(kind).await
    }

    async fn update_entry(
        &self,
        kind: EntryKind,
        id: &EntryId,
        command: UpdateEntryCommand,
    ) -> Result<Entry, CatalogError> {
        let mut entry = self.find_under_kind(kind, id).await?;

        if let Some(name) = command.name {
            entry.name = name;
        }
        if let Some(description) = command.description {
            entry.description = description;
        }
        if let Some(attributes) = command.attributes {
            entry.attributes = attributes;
        }
        entry.updated_at = Utc::now();

        self.repository.update(entry).await
    }

    async fn delete_entry(&self, kind: EntryKind, id: &EntryId) -> Result<(), CatalogError> {
        // Kind check first so a delete addressed under the wrong kind 404s
        // instead of removing a foreign entry.
        self.find_under_kind(kind, id).await?;

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::catalog::models::EntryName;

    mock! {
        pub TestEntryRepository {}

        #[async_trait]
        impl EntryRepository for TestEntryRepository {
            async fn insert(&self, entry: Entry) -> Result<Entry, CatalogError>;
            async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, CatalogError>;
            async fn list_by_kind(&self, kind: EntryKind) -> Result<Vec<Entry>, CatalogError>;
            async fn update(&self, entry: Entry) -> Result<Entry, CatalogError>;
            async fn delete(&self, id: &EntryId) -> Result<bool, CatalogError>;
        }
    }

    fn sample_entry(kind: EntryKind, name: &str) -> Entry {
        let now = Utc::now();
        Entry {
            id: EntryId::new(),
            kind,
            name: EntryName::new(name.to_string()).unwrap(),
            description: String::new(),
            attributes: serde_json::json!({}),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_entry() {
        let mut repository = MockTestEntryRepository::new();

        repository
            .expect_insert()
            .withf(|entry| {
                entry.kind == EntryKind::Weapon && entry.name.as_str() == "Excalibur"
            })
            .times(1)
            .returning(|entry| Ok(entry));

        let service = CatalogService::new(Arc::new(repository));

        let command = CreateEntryCommand {
            kind: EntryKind::Weapon,
            name: EntryName::new("Excalibur".to_string()).unwrap(),
            description: "A legendary sword".to_string(),
            attributes: serde_json::json!({"damage": 42}),
        };

        let entry = service.create_entry(command).await.unwrap();
        assert_eq!(entry.kind, EntryKind::Weapon);
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[tokio::test]
    async fn test_get_entry_not_found() {
        let mut repository = MockTestEntryRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.get_entry(EntryKind::World, &EntryId::new()).await;
        assert!(matches!(result.unwrap_err(), CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_entry_wrong_kind_is_not_found() {
        let mut repository = MockTestEntryRepository::new();
        let entry = sample_entry(EntryKind::Weapon, "Excalibur");
        let entry_id = entry.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(entry.clone())));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.get_entry(EntryKind::Character, &entry_id).await;
        assert!(matches!(result.unwrap_err(), CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_entry_patches_fields() {
        let mut repository = MockTestEntryRepository::new();
        let entry = sample_entry(EntryKind::Species, "Elf");
        let entry_id = entry.id;

        let found = entry.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        repository
            .expect_update()
            .withf(move |updated| {
                updated.id == entry_id
                    && updated.name.as_str() == "High Elf"
                    && updated.description.is_empty()
            })
            .times(1)
            .returning(|updated| Ok(updated));

        let service = CatalogService::new(Arc::new(repository));

        let command = UpdateEntryCommand {
            name: Some(EntryName::new("High Elf".to_string()).unwrap()),
            description: None,
            attributes: None,
        };

        let updated = service
            .update_entry(EntryKind::Species, &entry_id, command)
            .await
            .unwrap();
        assert_eq!(updated.name.as_str(), "High Elf");
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_delete_entry_success() {
        let mut repository = MockTestEntryRepository::new();
        let entry = sample_entry(EntryKind::Title, "Kingslayer");
        let entry_id = entry.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(entry.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == entry_id)
            .times(1)
            .returning(|_| Ok(true));

        let service = CatalogService::new(Arc::new(repository));

        assert!(service
            .delete_entry(EntryKind::Title, &entry_id)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_delete_entry_not_found() {
        let mut repository = MockTestEntryRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repository));

        let result = service
            .delete_entry(EntryKind::Title, &EntryId::new())
            .await;
        assert!(matches!(result.unwrap_err(), CatalogError::NotFound(_)));
    }
}
