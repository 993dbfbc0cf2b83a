//! Data models for users, accounts, transactions and summaries.
//! Wire format is the backend's camelCase JSON; dates stay ISO-8601 strings.

use crate::ids::{AccountId, TransactionId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Current,
    Savings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub user_id: UserId,
    pub name: String,
    pub balance: f64,
    #[serde(rename = "type")]
    pub type_: AccountType,
    pub account_number: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
            TransactionType::Transfer => "transfer",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction as stored by the backend. `type_` is the creator's declared intent;
/// use `classify` for the viewer-relative kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    pub date: String,
    pub amount: f64,
    pub sender: String,
    pub receiver: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type")]
    pub type_: TransactionType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBalance {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub net_change: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatistics {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_flow: f64,
    #[serde(default)]
    pub monthly_balances: Vec<MonthlyBalance>,
}

/// Server-computed snapshot: the account fields plus `statistics`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    #[serde(flatten)]
    pub account: Account,
    pub statistics: AccountStatistics,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub success: bool,
}

/// Request body for `POST /transactions`. See `draft` for validation and prefill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub amount: f64,
    pub sender: String,
    pub receiver: String,
    pub message: String,
    pub date: String,
    #[serde(rename = "type")]
    pub type_: TransactionType,
}
