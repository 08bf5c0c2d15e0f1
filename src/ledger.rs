use crate::{Account, AccountDetails, AccountError, AccountId, Amount, Operation, OperationError, OperationKind};

/// The identifier handed out to the first account of a ledger
pub const FIRST_ACCOUNT_NUMBER: u64 = 1001;

/// Possible errors to occur during the processing of a ledger operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error("Account not found.")]
    AccountNotFound(AccountId),
}

/// The result of a successfully applied [`Operation`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Created {
        account: AccountId,
    },
    Deposited {
        account: AccountId,
        amount: Amount,
        balance: Amount,
    },
    Withdrew {
        account: AccountId,
        amount: Amount,
        balance: Amount,
    },
    Transferred {
        from: AccountId,
        to: AccountId,
        /// The name of the receiving account holder
        recipient: String,
        amount: Amount,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { account } => {
                write!(f, "Account created successfully! Account Number: {}", account)
            }
            Self::Deposited { amount, .. } => write!(f, "Successfully deposited ${}", amount),
            Self::Withdrew { amount, .. } => write!(f, "Successfully withdrew ${}", amount),
            Self::Transferred { recipient, amount, .. } => {
                writeln!(f, "Successfully withdrew ${}", amount)?;
                writeln!(f, "Successfully deposited ${}", amount)?;
                write!(f, "Successfully transferred ${} to {}", amount, recipient)
            }
        }
    }
}

/// The registry owning all accounts
///
/// Accounts are kept in creation order. Identifiers are minted from a counter
/// that only ever increases, so they are never reused.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
    next_account_number: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates a new, empty ledger
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_account_number: FIRST_ACCOUNT_NUMBER,
        }
    }

    /// The number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// The sum of all account balances
    ///
    /// Returns `None` if the sum does not fit into an [`Amount`].
    pub fn total_balance(&self) -> Option<Amount> {
        self.accounts
            .iter()
            .try_fold(Amount::ZERO, |total, account| total.checked_add(account.balance()))
    }

    /// Opens a new account and returns its identifier
    ///
    /// The initial deposit is taken as is. Unlike [`Ledger::deposit`] it may
    /// be zero or negative.
    pub fn create_account(&mut self, name: impl Into<String>, initial_deposit: Amount) -> AccountId {
        let id = AccountId::from(self.next_account_number.to_string());
        self.next_account_number += 1;

        let account = Account::new(id.clone(), name.into(), initial_deposit);
        tracing::info!(account = %id, holder = account.holder(), balance = %initial_deposit, "account created");
        self.accounts.push(account);

        id
    }

    /// Looks up an account by its identifier
    pub fn find_account(&self, id: &AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .iter()
            .find(|account| account.id() == id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.clone()))
    }

    fn position(&self, id: &AccountId) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.id() == id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.clone()))
    }

    /// Deposits on an account and returns its new balance
    pub fn deposit(&mut self, id: &AccountId, amount: Amount) -> Result<Amount, LedgerError> {
        let index = self.position(id)?;
        let balance = self.accounts[index].deposit(amount)?;
        tracing::debug!(account = %id, %amount, %balance, "deposited");

        Ok(balance)
    }

    /// Withdraws from an account and returns its new balance
    pub fn withdraw(&mut self, id: &AccountId, amount: Amount) -> Result<Amount, LedgerError> {
        let index = self.position(id)?;
        let balance = self.accounts[index].withdraw(amount)?;
        tracing::debug!(account = %id, %amount, %balance, "withdrew");

        Ok(balance)
    }

    /// Moves funds between two accounts
    ///
    /// Both identifiers are resolved before any funds move. A transfer from
    /// an account to itself withdraws and re-deposits on the same account.
    pub fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let sender = self.position(from)?;
        let recipient = self.position(to)?;

        match sender.cmp(&recipient) {
            std::cmp::Ordering::Equal => {
                let account = &mut self.accounts[sender];
                account.withdraw(amount)?;
                account.deposit(amount)?;
            }
            std::cmp::Ordering::Less => {
                let (head, tail) = self.accounts.split_at_mut(recipient);
                head[sender].transfer(&mut tail[0], amount)?;
            }
            std::cmp::Ordering::Greater => {
                let (head, tail) = self.accounts.split_at_mut(sender);
                tail[0].transfer(&mut head[recipient], amount)?;
            }
        }
        tracing::debug!(%from, %to, %amount, "transferred");

        Ok(())
    }

    /// Snapshots of all accounts in creation order
    ///
    /// Returns `None` if the ledger holds no accounts at all.
    pub fn all_accounts(&self) -> Option<impl Iterator<Item = AccountDetails> + '_> {
        match self.accounts.is_empty() {
            true => None,
            false => Some(self.accounts.iter().map(Account::details)),
        }
    }

    /// Applies one operation to the ledger
    pub fn apply(&mut self, operation: &Operation) -> Result<Outcome, LedgerError> {
        let outcome = match operation.kind() {
            OperationKind::Create => {
                let account = self.create_account(operation.name()?, operation.amount()?);
                Outcome::Created { account }
            }
            OperationKind::Deposit => {
                let account = operation.account()?;
                let amount = operation.amount()?;
                let balance = self.deposit(account, amount)?;
                Outcome::Deposited { account: account.clone(), amount, balance }
            }
            OperationKind::Withdraw => {
                let account = operation.account()?;
                let amount = operation.amount()?;
                let balance = self.withdraw(account, amount)?;
                Outcome::Withdrew { account: account.clone(), amount, balance }
            }
            OperationKind::Transfer => {
                let from = operation.account()?;
                let to = operation.recipient()?;
                let amount = operation.amount()?;
                self.transfer(from, to, amount)?;
                Outcome::Transferred {
                    from: from.clone(),
                    to: to.clone(),
                    recipient: self.find_account(to)?.holder().to_owned(),
                    amount,
                }
            }
        };

        Ok(outcome)
    }
}
