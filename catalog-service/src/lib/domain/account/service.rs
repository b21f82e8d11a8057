use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::CreateAccountCommand;
use crate::account::models::Identifier;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for credential operations.
///
/// Argon2 hashing and verification are CPU-bound by design, so both run on
/// the blocking thread pool rather than on the request loop.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: PasswordHasher,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with an injected credential store.
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AccountError::Hashing(e.to_string()))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AccountError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self.hash_password(command.password).await?;

        let account = Account {
            id: AccountId::new(),
            identifier: command.identifier,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        // The unique index on identifier resolves concurrent signups; no
        // read-before-write check here, the insert itself is the arbiter.
        self.repository.create(account).await
    }

    async fn authenticate(
        &self,
        identifier: &Identifier,
        password: &str,
    ) -> Result<Account, AccountError> {
        let account = self
            .repository
            .find_by_identifier(identifier)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let matches = self
            .verify_password(password.to_string(), account.password_hash.clone())
            .await?;

        if !matches {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account)
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }

    async fn update_password(
        &self,
        id: &AccountId,
        new_password: &str,
    ) -> Result<Account, AccountError> {
        let password_hash = self.hash_password(new_password.to_string()).await?;
        self.repository.update_password_hash(id, &password_hash).await
    }
}
