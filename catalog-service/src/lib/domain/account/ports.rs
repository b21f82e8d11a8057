use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::CreateAccountCommand;
use crate::account::models::Identifier;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Create a new account from validated input.
    ///
    /// Hashes the password and inserts the credential record. When two
    /// signups race on the same identifier, the store's uniqueness constraint
    /// picks the winner; the loser observes `DuplicateIdentifier`.
    ///
    /// # Errors
    /// * `DuplicateIdentifier` - identifier already registered
    /// * `Hashing` - hash engine failure
    /// * `DatabaseError` - store operation failed
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError>;

    /// Verify a password against the stored credential.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown identifier or wrong password; the two
    ///   cases are indistinguishable by design
    /// * `DatabaseError` - store operation failed
    async fn authenticate(
        &self,
        identifier: &Identifier,
        password: &str,
    ) -> Result<Account, AccountError>;

    /// Retrieve an account by its unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - account does not exist
    /// * `DatabaseError` - store operation failed
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError>;

    /// Rehash and overwrite the account's password.
    ///
    /// # Errors
    /// * `NotFound` - subject no longer exists
    /// * `Hashing` - hash engine failure
    /// * `DatabaseError` - store operation failed
    async fn update_password(
        &self,
        id: &AccountId,
        new_password: &str,
    ) -> Result<Account, AccountError>;
}

/// Persistence operations for the credential store.
///
/// Implementations are expected to provide atomic per-row reads/writes and a
/// uniqueness constraint on `identifier`; the service performs no locking of
/// its own.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `DuplicateIdentifier` - uniqueness constraint rejected the insert
    /// * `DatabaseError` - store operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by ID.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by login identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Account>, AccountError>;

    /// Overwrite the stored password hash.
    ///
    /// # Errors
    /// * `NotFound` - account does not exist
    /// * `DatabaseError` - store operation failed
    async fn update_password_hash(
        &self,
        id: &AccountId,
        password_hash: &str,
    ) -> Result<Account, AccountError>;
}
