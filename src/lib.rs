pub use self::{
    account::{Account, AccountDetails, AccountError, AccountId, Amount},
    ledger::{Ledger, LedgerError, Outcome, FIRST_ACCOUNT_NUMBER},
    menu::Menu,
    operation::{Operation, OperationError, OperationKind},
};

mod account;
mod ledger;
mod menu;
mod operation;
