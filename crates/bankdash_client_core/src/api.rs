//! HTTP client for the banking backend (auth, accounts, summaries, transactions).
//!
//! `Backend` is the seam the session and store depend on; `ApiClient` is the
//! reqwest implementation. Calls are single-threaded futures, so the trait does
//! not require `Send`.

use crate::client_log;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::filters::TransactionFilters;
use crate::ids::AccountId;
use crate::models::{Account, AccountSummary, LoginCredentials, LoginResponse, NewTransaction, Transaction};
use crate::storage::{KeyValueStore, TOKEN_KEY};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;

#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ClientError>;
    fn clear_token(&self) -> Result<(), ClientError>;
    async fn list_accounts(&self) -> Result<Vec<Account>, ClientError>;
    async fn account_summary(&self, account_id: &AccountId) -> Result<AccountSummary, ClientError>;
    async fn list_transactions(
        &self,
        account_id: &AccountId,
        filters: Option<&TransactionFilters>,
    ) -> Result<Vec<Transaction>, ClientError>;
    async fn create_transaction(&self, data: &NewTransaction) -> Result<Transaction, ClientError>;
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    storage: Rc<dyn KeyValueStore>,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    /// Restores any token already held by `storage`.
    pub fn new(config: ClientConfig, storage: Rc<dyn KeyValueStore>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("HTTP client: {}", e)))?;
        let token = storage.get(TOKEN_KEY)?;
        if token.is_some() {
            client_log!(Debug, "[bankdash] api: restored stored credential");
        }
        Ok(Self {
            http,
            config,
            storage,
            token: RefCell::new(token),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn has_token(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<(), ClientError> {
        self.storage.set(TOKEN_KEY, token)?;
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.token.borrow().as_deref() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ClientError::Validation("Stored credential is not a valid header value".to_string())
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        Ok(self.http.get(self.config.endpoint(path)).headers(self.headers()?))
    }
}

/// Sends the request and decodes a success body. Non-success statuses use the
/// backend's `message` field when present; `reject` picks the error variant.
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    fallback: &str,
    reject: fn(String) -> ClientError,
) -> Result<T, ClientError> {
    let resp = request.send().await.map_err(|e| {
        client_log!(Warn, "[bankdash] api: request failed: {}", e);
        ClientError::Fetch(format!("{}: {}", fallback, e))
    })?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| {
        client_log!(Warn, "[bankdash] api: reading body failed: {}", e);
        ClientError::Fetch(fallback.to_string())
    })?;
    if !status.is_success() {
        let message = backend_message(&text).unwrap_or_else(|| fallback.to_string());
        client_log!(Warn, "[bankdash] api: {} -> {}", status, message);
        return Err(reject(message));
    }
    serde_json::from_str(&text).map_err(|e| {
        client_log!(Error, "[bankdash] api: malformed response body: {}", e);
        ClientError::Fetch(fallback.to_string())
    })
}

fn backend_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("message")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl Backend for ApiClient {
    /// POST /auth/login -> { user, token, success }
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ClientError> {
        client_log!(Info, "[bankdash] api::login username={}", credentials.username);
        let request = self
            .http
            .post(self.config.endpoint("/auth/login"))
            .headers(self.headers()?)
            .json(credentials);
        let response: LoginResponse = send_json(request, "Login failed", ClientError::Auth).await?;
        self.set_token(&response.token)?;
        Ok(response)
    }

    fn clear_token(&self) -> Result<(), ClientError> {
        *self.token.borrow_mut() = None;
        self.storage.remove(TOKEN_KEY)
    }

    /// GET /user/accounts
    async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        send_json(self.get("/user/accounts")?, "Failed to fetch accounts", ClientError::Fetch).await
    }

    /// GET /account/{id}/summary
    async fn account_summary(&self, account_id: &AccountId) -> Result<AccountSummary, ClientError> {
        let path = format!("/account/{}/summary", account_id.path_segment());
        send_json(self.get(&path)?, "Failed to fetch account summary", ClientError::Fetch).await
    }

    /// GET /account/{id}/transactions?startDate=..&sortBy=..
    async fn list_transactions(
        &self,
        account_id: &AccountId,
        filters: Option<&TransactionFilters>,
    ) -> Result<Vec<Transaction>, ClientError> {
        let path = format!("/account/{}/transactions", account_id.path_segment());
        let mut request = self.get(&path)?;
        if let Some(f) = filters {
            request = request.query(&f.query_pairs());
        }
        send_json(request, "Failed to fetch transactions", ClientError::Fetch).await
    }

    /// POST /transactions. Validates locally first; nothing is sent on failure.
    async fn create_transaction(&self, data: &NewTransaction) -> Result<Transaction, ClientError> {
        data.validate()?;
        client_log!(
            Info,
            "[bankdash] api::create_transaction account_id={} type={}",
            data.account_id,
            data.type_
        );
        let request = self
            .http
            .post(self.config.endpoint("/transactions"))
            .headers(self.headers()?)
            .json(data);
        send_json(request, "Failed to create transaction", ClientError::Fetch).await
    }
}
