//! Banking dashboard client core: authenticated API client, session, and the
//! account/transaction state store the UI renders from.

use std::path::Path;
use std::rc::Rc;

pub mod api;
pub mod classify;
pub mod config;
pub mod draft;
pub mod error;
pub mod filters;
pub mod format;
pub mod ids;
pub mod log_bridge;
pub mod models;
pub mod session;
pub mod storage;
pub mod store;

pub use api::{ApiClient, Backend};
pub use classify::{classify, Classification};
pub use config::ClientConfig;
pub use error::ClientError;
pub use filters::{SortBy, SortOrder, TransactionFilters};
pub use ids::{AccountId, TransactionId, UserId};
pub use models::{
    Account, AccountStatistics, AccountSummary, AccountType, LoginCredentials, LoginResponse,
    MonthlyBalance, NewTransaction, Transaction, TransactionType, User,
};
pub use session::Session;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{BankState, BankStore};

/// Session and store wired to one `ApiClient` and one credential store.
pub struct ClientCore {
    pub session: Session<ApiClient>,
    pub bank: BankStore<ApiClient>,
}

impl ClientCore {
    /// Builds the client and restores any persisted session.
    pub fn new(config: ClientConfig, storage: Rc<dyn KeyValueStore>) -> Result<Self, ClientError> {
        client_log!(Info, "[bankdash] client core: base_url={}", config.base_url);
        let api = Rc::new(ApiClient::new(config, Rc::clone(&storage))?);
        let session = Session::new(Rc::clone(&api), storage);
        session.restore()?;
        Ok(Self {
            session,
            bank: BankStore::new(api),
        })
    }

    /// Same as `new`, persisting credentials under `storage_dir`.
    pub fn open(config: ClientConfig, storage_dir: impl AsRef<Path>) -> Result<Self, ClientError> {
        let storage: Rc<dyn KeyValueStore> = Rc::new(SqliteStore::open(storage_dir)?);
        Self::new(config, storage)
    }
}

/// Drain buffered log lines for display.
pub fn drain_logs() -> Vec<String> {
    log_bridge::drain_logs()
}
