use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::Entry;
use crate::catalog::models::EntryId;
use crate::catalog::models::EntryKind;
use crate::catalog::models::EntryName;
use crate::catalog::ports::EntryRepository;

/// Catalog entry store backed by Postgres.
pub struct PostgresEntryRepository {
    pool: PgPool,
}

impl PostgresEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EntryRow {
    id: Uuid,
    kind: String,
    name: String,
    description: String,
    attributes: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EntryRow {
    fn try_into_entry(self) -> Result<Entry, CatalogError> {
        let kind = EntryKind::from_str(&self.kind)
            .map_err(|e| CatalogError::Unknown(format!("Corrupt kind column: {}", e)))?;

        Ok(Entry {
            id: EntryId(self.id),
            kind,
            name: EntryName::new(self.name)?,
            description: self.description,
            attributes: self.attributes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn insert(&self, entry: Entry) -> Result<Entry, CatalogError> {
        sqlx::query(
            r#"
            INSERT INTO entries (id, kind, name, description, attributes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id.0)
        .bind(entry.kind.as_str())
        .bind(entry.name.as_str())
        .bind(&entry.description)
        .bind(&entry.attributes)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(entry)
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, CatalogError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, kind, name, description, attributes, created_at, updated_at
            FROM entries
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        row.map(EntryRow::try_into_entry).transpose()
    }

    async fn list_by_kind(&self, kind: EntryKind) -> Result<Vec<Entry>, CatalogError> {
        let rows = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, kind, name, description, attributes, created_at, updated_at
            FROM entries
            WHERE kind = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(EntryRow::try_into_entry).collect()
    }

    async fn update(&self, entry: Entry) -> Result<Entry, CatalogError> {
        let result = sqlx::query(
            r#"
            UPDATE entries
            SET name = $2, description = $3, attributes = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(entry.id.0)
        .bind(entry.name.as_str())
        .bind(&entry.description)
        .bind(&entry.attributes)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(entry.id.to_string()));
        }

        Ok(entry)
    }

    async fn delete(&self, id: &EntryId) -> Result<bool, CatalogError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
