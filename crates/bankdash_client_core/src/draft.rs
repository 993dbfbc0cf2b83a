//! New-transaction drafts: local validation and the form's type-driven prefill.

use crate::error::ClientError;
use crate::format::{input_date_string, parse_timestamp};
use crate::models::{Account, NewTransaction, TransactionType};

impl NewTransaction {
    /// Local preconditions checked before anything is sent. First failing rule wins.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ClientError::Validation("Please enter a valid amount".to_string()));
        }
        if self.sender.trim().is_empty() {
            return Err(ClientError::Validation("Please enter a sender".to_string()));
        }
        if self.receiver.trim().is_empty() {
            return Err(ClientError::Validation("Please enter a receiver".to_string()));
        }
        if parse_timestamp(&self.date).is_none() {
            return Err(ClientError::Validation("Please select a valid date".to_string()));
        }
        Ok(())
    }

    /// Starting point for the create form. Amount is left at zero, so the draft does
    /// not validate until the caller fills it in.
    pub fn prefill(type_: TransactionType, selected: &Account, accounts: &[Account]) -> Self {
        let (sender, receiver) = match type_ {
            TransactionType::Expense => (selected.name.clone(), String::new()),
            TransactionType::Income => (String::new(), selected.name.clone()),
            TransactionType::Transfer => {
                let other = accounts
                    .iter()
                    .find(|a| a.id != selected.id)
                    .map(|a| a.name.clone())
                    .unwrap_or_default();
                (selected.name.clone(), other)
            }
        };
        Self {
            account_id: selected.id.clone(),
            amount: 0.0,
            sender,
            receiver,
            message: String::new(),
            date: input_date_string(None),
            type_,
        }
    }
}
