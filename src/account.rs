use rust_decimal::Decimal;

/// A monetary amount
///
/// Amounts are signed decimals, so non-positive inputs can be represented and
/// rejected by the account operations.
pub type Amount = Decimal;

/// Possible errors to occur during account operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Deposit amount must be positive.")]
    InvalidAmount,
    /// Covers both a non-positive amount and an amount exceeding the balance
    #[error("Insufficient balance or invalid amount.")]
    InsufficientFunds,
    #[error("The balance would overflow")]
    Overflow,
}

/// The unique identifier of an account
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A read-only snapshot of an account, used for rendering
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountDetails {
    pub name: String,
    pub account: AccountId,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Amount,
}

impl std::fmt::Display for AccountDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Account Holder: {}", self.name)?;
        writeln!(f, "Account Number: {}", self.account)?;
        write!(f, "Balance: ${}", self.balance)
    }
}

/// A bank account held by a single named party
///
/// Accounts are only ever created by the [`Ledger`](crate::Ledger), which
/// assigns their identifiers.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: Amount,
}

impl Account {
    /// Creates a new account with the given opening balance
    ///
    /// The opening balance is not validated, so zero or negative balances
    /// are accepted here even though [`Account::deposit`] rejects them.
    pub(crate) fn new(id: AccountId, holder: String, balance: Amount) -> Self {
        Self { id, holder, balance }
    }

    /// The identifier of the account
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// The name of the account holder
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// The current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Deposits the specified amount and returns the new balance
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if amount <= Amount::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        self.balance = self.balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;

        Ok(self.balance)
    }

    /// Withdraws the specified amount and returns the new balance
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if amount <= Amount::ZERO || amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }
        self.balance -= amount;

        Ok(self.balance)
    }

    /// Moves the specified amount from this account to `recipient`
    ///
    /// The recipient is only credited after the withdrawal succeeded. A failed
    /// transfer leaves both accounts untouched.
    pub fn transfer(&mut self, recipient: &mut Account, amount: Amount) -> Result<(), AccountError> {
        self.withdraw(amount)?;
        if let Err(error) = recipient.deposit(amount) {
            // give the withdrawn funds back, this cannot overflow
            self.balance += amount;
            return Err(error);
        }

        Ok(())
    }

    /// A snapshot of the holder, identifier and balance
    pub fn details(&self) -> AccountDetails {
        AccountDetails {
            name: self.holder.clone(),
            account: self.id.clone(),
            balance: self.balance,
        }
    }
}
