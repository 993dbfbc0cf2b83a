//! Viewer-relative classification: whether a transaction is income, expense or a
//! transfer from the point of view of the account being displayed. The stored
//! `type` field is never consulted.

use crate::format::format_transaction_amount;
use crate::models::{Transaction, TransactionType};

#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub kind: TransactionType,
    /// `+|amount|` for income, `-|amount|` for expense, raw amount for transfer.
    pub display_amount: f64,
    pub display: String,
}

/// Kind only. Rule order matters: income, then expense, otherwise transfer.
pub fn classify_kind(sender: &str, receiver: &str, viewer: &str) -> TransactionType {
    if receiver == viewer && sender != viewer {
        TransactionType::Income
    } else if sender == viewer && receiver != viewer {
        TransactionType::Expense
    } else {
        TransactionType::Transfer
    }
}

pub fn classify(tx: &Transaction, viewer: &str) -> Classification {
    let kind = classify_kind(&tx.sender, &tx.receiver, viewer);
    let display_amount = match kind {
        TransactionType::Income => tx.amount.abs(),
        TransactionType::Expense => -tx.amount.abs(),
        TransactionType::Transfer => tx.amount,
    };
    Classification {
        kind,
        display_amount,
        display: format_transaction_amount(tx.amount, kind),
    }
}
