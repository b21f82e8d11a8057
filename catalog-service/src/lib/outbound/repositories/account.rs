use std::str::FromStr;

use async_trait::async_trait;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::Identifier;
use crate::account::ports::AccountRepository;

/// Credential store backed by Postgres.
///
/// The unique index on `identifier` is the authoritative arbiter for
/// concurrent signups: one insert wins, the other surfaces as
/// `DuplicateIdentifier`.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    identifier: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn try_into_account(self) -> Result<Account, AccountError> {
        let role = Role::from_str(&self.role)
            .map_err(|e| AccountError::Unknown(format!("Corrupt role column: {}", e)))?;

        Ok(Account {
            id: AccountId(self.id),
            identifier: Identifier::new(self.identifier)?,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, identifier, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.id.0)
        .bind(account.identifier.as_str())
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::DuplicateIdentifier(
                        account.identifier.as_str().to_string(),
                    );
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, identifier, password_hash, role, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(AccountRow::try_into_account).transpose()
    }

    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, identifier, password_hash, role, created_at
            FROM accounts
            WHERE identifier = $1
            "#,
        )
        .bind(identifier.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(AccountRow::try_into_account).transpose()
    }

    async fn update_password_hash(
        &self,
        id: &AccountId,
        password_hash: &str,
    ) -> Result<Account, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET password_hash = $2
            WHERE id = $1
            RETURNING id, identifier, password_hash, role, created_at
            "#,
        )
        .bind(id.0)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(AccountRow::try_into_account)
            .transpose()?
            .ok_or(AccountError::NotFound(id.to_string()))
    }
}
