pub mod account;
pub mod entry;

pub use account::PostgresAccountRepository;
pub use entry::PostgresEntryRepository;
