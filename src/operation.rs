use crate::account::{AccountId, Amount};

/// Possible errors to occur while reading an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("The operation is missing the `{0}` field")]
    MissingField(&'static str),
}

/// The different kinds of operations supported by the ledger
#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Opens a new account with an initial deposit
    Create,
    /// A credit to an existing account
    Deposit,
    /// A debit from an existing account
    Withdraw,
    /// A debit from one account and a credit to another
    Transfer,
}

/// An operation
///
/// Operations are orders to the ledger to open accounts or to move funds.
/// Which of the optional fields are needed depends on the [`OperationKind`]:
///
/// | kind     | account | recipient | name | amount |
/// |----------|---------|-----------|------|--------|
/// | create   |         |           | x    | x      |
/// | deposit  | x       |           |      | x      |
/// | withdraw | x       |           |      | x      |
/// | transfer | x       | x         |      | x      |
#[derive(Clone, Debug, serde::Deserialize, PartialEq, Eq)]
pub struct Operation {
    #[serde(rename = "type")]
    kind: OperationKind,
    account: Option<AccountId>,
    recipient: Option<AccountId>,
    name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    amount: Option<Amount>,
}

impl Operation {
    /// Opens an account for `name` with the given initial deposit
    pub fn create(name: impl Into<String>, initial_deposit: Amount) -> Self {
        Self {
            kind: OperationKind::Create,
            account: None,
            recipient: None,
            name: Some(name.into()),
            amount: Some(initial_deposit),
        }
    }

    /// Deposits `amount` on `account`
    pub fn deposit(account: AccountId, amount: Amount) -> Self {
        Self {
            kind: OperationKind::Deposit,
            account: Some(account),
            recipient: None,
            name: None,
            amount: Some(amount),
        }
    }

    /// Withdraws `amount` from `account`
    pub fn withdraw(account: AccountId, amount: Amount) -> Self {
        Self {
            kind: OperationKind::Withdraw,
            account: Some(account),
            recipient: None,
            name: None,
            amount: Some(amount),
        }
    }

    /// Transfers `amount` from `account` to `recipient`
    pub fn transfer(account: AccountId, recipient: AccountId, amount: Amount) -> Self {
        Self {
            kind: OperationKind::Transfer,
            account: Some(account),
            recipient: Some(recipient),
            name: None,
            amount: Some(amount),
        }
    }

    /// The kind of the operation
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The account this operation is for
    pub fn account(&self) -> Result<&AccountId, OperationError> {
        self.account.as_ref().ok_or(OperationError::MissingField("account"))
    }

    /// The receiving account of a transfer
    pub fn recipient(&self) -> Result<&AccountId, OperationError> {
        self.recipient.as_ref().ok_or(OperationError::MissingField("recipient"))
    }

    /// The holder name of a new account
    pub fn name(&self) -> Result<&str, OperationError> {
        self.name.as_deref().ok_or(OperationError::MissingField("name"))
    }

    /// The amount
    pub fn amount(&self) -> Result<Amount, OperationError> {
        self.amount.ok_or(OperationError::MissingField("amount"))
    }
}
