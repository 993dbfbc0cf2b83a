//! Sample users, accounts and transactions shared by the integration tests.

use bankdash_client_core::{
    Account, AccountId, AccountStatistics, AccountSummary, AccountType, LoginResponse, MonthlyBalance,
    NewTransaction, Transaction, TransactionId, TransactionType, User, UserId,
};

pub const MAIN: &str = "acc-1";
pub const SAVINGS: &str = "acc-2";

pub fn account_id(id: &str) -> AccountId {
    AccountId::parse(id).expect("account id")
}

pub fn user() -> User {
    User {
        id: UserId::parse("user-1").expect("user id"),
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
    }
}

pub fn login_response(token: &str) -> LoginResponse {
    LoginResponse {
        user: user(),
        token: token.to_string(),
        success: true,
    }
}

pub fn account(id: &str, name: &str, balance: f64) -> Account {
    Account {
        id: account_id(id),
        user_id: UserId::parse("user-1").expect("user id"),
        name: name.to_string(),
        balance,
        type_: if id == SAVINGS { AccountType::Savings } else { AccountType::Current },
        account_number: format!("SE00-{}", id),
    }
}

pub fn main_account() -> Account {
    account(MAIN, "Main Account", 2500.0)
}

pub fn savings_account() -> Account {
    account(SAVINGS, "Savings", 10_000.0)
}

pub fn transaction(id: &str, account: &str, sender: &str, receiver: &str, amount: f64) -> Transaction {
    Transaction {
        id: TransactionId::parse(id).expect("transaction id"),
        account_id: account_id(account),
        date: "2024-03-01T10:00:00Z".to_string(),
        amount,
        sender: sender.to_string(),
        receiver: receiver.to_string(),
        message: String::new(),
        type_: TransactionType::Expense,
    }
}

pub fn summary(account: &Account) -> AccountSummary {
    AccountSummary {
        account: account.clone(),
        statistics: AccountStatistics {
            total_income: 3000.0,
            total_expenses: 500.0,
            net_flow: 2500.0,
            monthly_balances: vec![MonthlyBalance {
                month: "2024-03".to_string(),
                income: 3000.0,
                expenses: 500.0,
                net_change: 2500.0,
            }],
        },
    }
}

pub fn new_expense(account: &str, amount: f64) -> NewTransaction {
    NewTransaction {
        account_id: account_id(account),
        amount,
        sender: "Main Account".to_string(),
        receiver: "Grocery Store".to_string(),
        message: "Weekly shop".to_string(),
        date: "2024-03-02T00:00:00.000Z".to_string(),
        type_: TransactionType::Expense,
    }
}
