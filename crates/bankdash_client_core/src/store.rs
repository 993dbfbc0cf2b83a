//! Application state store: accounts, transactions, selection, summary, and a
//! single loading flag / error slot shared by every operation.
//!
//! State lives behind `Rc<RefCell<_>>` and is never borrowed across an await, so
//! operations issued concurrently on one thread interleave at the network calls.
//! Two fetches of the same resource both complete and the last one to resolve
//! overwrites the other; there is no request sequencing.

use crate::api::Backend;
use crate::classify::{classify, Classification};
use crate::client_log;
use crate::error::ClientError;
use crate::filters::TransactionFilters;
use crate::ids::AccountId;
use crate::models::{Account, AccountSummary, NewTransaction, Transaction};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BankState {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    /// Account the held transaction list was fetched for.
    pub transactions_account: Option<AccountId>,
    pub selected_account: Option<Account>,
    pub account_summary: Option<AccountSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl BankState {
    fn selected_id(&self) -> Option<&AccountId> {
        self.selected_account.as_ref().map(|a| &a.id)
    }

    /// The summary, but only if it belongs to the selected account.
    pub fn current_summary(&self) -> Option<&AccountSummary> {
        let summary = self.account_summary.as_ref()?;
        (Some(&summary.account.id) == self.selected_id()).then_some(summary)
    }

    /// The transaction list, but only if it was fetched for the selected account.
    pub fn current_transactions(&self) -> Option<&[Transaction]> {
        let selected = self.selected_id()?;
        (self.transactions_account.as_ref() == Some(selected)).then_some(self.transactions.as_slice())
    }

    /// The selected account's transactions classified against its name.
    /// Empty until the list has been fetched for that account.
    pub fn classified_transactions(&self) -> Vec<(&Transaction, Classification)> {
        let (Some(account), Some(transactions)) = (&self.selected_account, self.current_transactions()) else {
            return Vec::new();
        };
        transactions
            .iter()
            .map(|tx| (tx, classify(tx, &account.name)))
            .collect()
    }
}

/// Single-owner handle; clones share the same state and backend.
pub struct BankStore<B> {
    backend: Rc<B>,
    state: Rc<RefCell<BankState>>,
}

impl<B> Clone for BankStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            state: Rc::clone(&self.state),
        }
    }
}

impl<B: Backend> BankStore<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self {
            backend,
            state: Rc::new(RefCell::new(BankState::default())),
        }
    }

    /// Do not hold the returned guard across an await.
    pub fn state(&self) -> Ref<'_, BankState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> BankState {
        self.state.borrow().clone()
    }

    fn begin(&self) {
        let mut s = self.state.borrow_mut();
        s.is_loading = true;
        s.error = None;
    }

    fn finish(&self, op: &str, err: Option<&ClientError>) {
        let mut s = self.state.borrow_mut();
        if let Some(e) = err {
            client_log!(Warn, "[bankdash] store::{} failed: {}", op, e);
            s.error = Some(e.to_string());
        }
        s.is_loading = false;
    }

    /// Errors land in the error slot.
    pub async fn fetch_accounts(&self) {
        self.begin();
        let result = self.load_accounts().await;
        self.finish("fetch_accounts", result.as_ref().err());
    }

    /// Full replace of the transaction list; errors land in the error slot.
    pub async fn fetch_transactions(&self, account_id: &AccountId, filters: Option<&TransactionFilters>) {
        self.begin();
        let result = self.load_transactions(account_id, filters).await;
        self.finish("fetch_transactions", result.as_ref().err());
    }

    /// Errors land in the error slot.
    pub async fn fetch_account_summary(&self, account_id: &AccountId) {
        self.begin();
        let result = self.load_summary(account_id).await;
        self.finish("fetch_account_summary", result.as_ref().err());
    }

    /// Does not refetch; the caller requests fresh data for the new selection.
    pub fn select_account(&self, account: Account) {
        client_log!(Info, "[bankdash] store::select_account id={}", account.id);
        self.state.borrow_mut().selected_account = Some(account);
    }

    /// Creates the transaction, then refreshes transactions, summary and accounts
    /// for the selected account (in that order) if one is selected. Any failure is
    /// recorded in the error slot and returned.
    pub async fn create_transaction(&self, data: &NewTransaction) -> Result<Transaction, ClientError> {
        self.begin();
        let result = self.create_and_refresh(data).await;
        self.finish("create_transaction", result.as_ref().err());
        result
    }

    async fn create_and_refresh(&self, data: &NewTransaction) -> Result<Transaction, ClientError> {
        let created = self.backend.create_transaction(data).await?;
        let selected = self.state.borrow().selected_id().cloned();
        if let Some(id) = selected {
            self.load_transactions(&id, None).await?;
            self.load_summary(&id).await?;
            self.load_accounts().await?;
        }
        Ok(created)
    }

    async fn load_accounts(&self) -> Result<(), ClientError> {
        let accounts = self.backend.list_accounts().await?;
        client_log!(Debug, "[bankdash] store: {} accounts", accounts.len());
        let mut s = self.state.borrow_mut();
        let selected = match &s.selected_account {
            None => accounts.first().cloned(),
            // Same selection, fresh balance.
            Some(selected) => Some(
                accounts
                    .iter()
                    .find(|a| a.id == selected.id)
                    .unwrap_or(selected)
                    .clone(),
            ),
        };
        s.selected_account = selected;
        s.accounts = accounts;
        Ok(())
    }

    async fn load_transactions(
        &self,
        account_id: &AccountId,
        filters: Option<&TransactionFilters>,
    ) -> Result<(), ClientError> {
        let transactions = self.backend.list_transactions(account_id, filters).await?;
        client_log!(
            Debug,
            "[bankdash] store: {} transactions for account {}",
            transactions.len(),
            account_id
        );
        let mut s = self.state.borrow_mut();
        s.transactions = transactions;
        s.transactions_account = Some(account_id.clone());
        Ok(())
    }

    async fn load_summary(&self, account_id: &AccountId) -> Result<(), ClientError> {
        let summary = self.backend.account_summary(account_id).await?;
        self.state.borrow_mut().account_summary = Some(summary);
        Ok(())
    }
}
