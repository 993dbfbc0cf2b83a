//! In-process `Backend` that records calls in order and serves canned data.

use bankdash_client_core::{
    Account, AccountId, AccountSummary, Backend, ClientError, LoginCredentials, LoginResponse,
    NewTransaction, Transaction, TransactionFilters,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::fixtures;

pub struct FakeBackend {
    pub calls: RefCell<Vec<String>>,
    pub login_result: RefCell<Result<LoginResponse, ClientError>>,
    pub accounts: RefCell<Result<Vec<Account>, ClientError>>,
    pub transactions: RefCell<HashMap<String, Vec<Transaction>>>,
    pub summaries: RefCell<HashMap<String, AccountSummary>>,
    pub create_result: RefCell<Result<Transaction, ClientError>>,
    /// Times `list_transactions` yields to the scheduler before answering, per account.
    pub transaction_yields: RefCell<HashMap<String, usize>>,
    pub token_cleared: Cell<usize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            login_result: RefCell::new(Ok(fixtures::login_response("tok-fake"))),
            accounts: RefCell::new(Ok(Vec::new())),
            transactions: RefCell::new(HashMap::new()),
            summaries: RefCell::new(HashMap::new()),
            create_result: RefCell::new(Ok(fixtures::transaction(
                "t-new",
                fixtures::MAIN,
                "Main Account",
                "Grocery Store",
                -42.0,
            ))),
            transaction_yields: RefCell::new(HashMap::new()),
            token_cleared: Cell::new(0),
        }
    }

    pub fn with_accounts(self, accounts: Vec<Account>) -> Self {
        for a in &accounts {
            self.summaries
                .borrow_mut()
                .insert(a.id.to_string(), fixtures::summary(a));
        }
        *self.accounts.borrow_mut() = Ok(accounts);
        self
    }

    pub fn with_transactions(self, account: &str, txs: Vec<Transaction>) -> Self {
        self.transactions.borrow_mut().insert(account.to_string(), txs);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Backend for FakeBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ClientError> {
        self.record(format!("login({})", credentials.username));
        self.login_result.borrow().clone()
    }

    fn clear_token(&self) -> Result<(), ClientError> {
        self.token_cleared.set(self.token_cleared.get() + 1);
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        self.record("accounts".to_string());
        self.accounts.borrow().clone()
    }

    async fn account_summary(&self, account_id: &AccountId) -> Result<AccountSummary, ClientError> {
        self.record(format!("summary({})", account_id));
        self.summaries
            .borrow()
            .get(account_id.as_str())
            .cloned()
            .ok_or_else(|| ClientError::Fetch("Account not found".to_string()))
    }

    async fn list_transactions(
        &self,
        account_id: &AccountId,
        filters: Option<&TransactionFilters>,
    ) -> Result<Vec<Transaction>, ClientError> {
        let query = filters
            .map(|f| {
                f.query_pairs()
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join("&")
            })
            .map(|q| format!("?{}", q))
            .unwrap_or_default();
        self.record(format!("transactions({}{})", account_id, query));
        let yields = self
            .transaction_yields
            .borrow()
            .get(account_id.as_str())
            .copied()
            .unwrap_or(0);
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }
        Ok(self
            .transactions
            .borrow()
            .get(account_id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn create_transaction(&self, data: &NewTransaction) -> Result<Transaction, ClientError> {
        self.record(format!("create({})", data.account_id));
        self.create_result.borrow().clone()
    }
}
