//! Property-based tests for ledger invariants
//!
//! - Deposits and withdrawals move the balance by exactly the amount, or not at all
//! - Money conservation: transfers never change the total balance
//! - Failed operations never mutate any account
//! - Identifiers are sequential and unique

use bank_ledger::{AccountError, AccountId, Amount, Ledger, LedgerError, FIRST_ACCOUNT_NUMBER};
use proptest::prelude::*;
use rust_decimal_macros::dec;

/// Strategy for generating positive amounts with two decimal places
fn amount_strategy() -> impl Strategy<Value = Amount> {
    (1i64..1_000_000_00i64).prop_map(|cents| Amount::new(cents, 2))
}

/// Strategy for generating zero or negative amounts
fn non_positive_strategy() -> impl Strategy<Value = Amount> {
    (-1_000_000i64..=0i64).prop_map(Amount::from)
}

/// Strategy for generating opening balances
fn balance_strategy() -> impl Strategy<Value = Amount> {
    (0i64..1_000_000i64).prop_map(Amount::from)
}

fn balance(ledger: &Ledger, id: &AccountId) -> Amount {
    ledger.find_account(id).unwrap().balance()
}

proptest! {
    #[test]
    fn deposit_adds_exactly(opening in balance_strategy(), amount in amount_strategy()) {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", opening);

        prop_assert_eq!(ledger.deposit(&id, amount), Ok(opening + amount));
        prop_assert_eq!(balance(&ledger, &id), opening + amount);
    }

    #[test]
    fn non_positive_deposit_is_rejected(opening in balance_strategy(), amount in non_positive_strategy()) {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", opening);

        prop_assert_eq!(
            ledger.deposit(&id, amount),
            Err(LedgerError::Account(AccountError::InvalidAmount))
        );
        prop_assert_eq!(balance(&ledger, &id), opening);
    }

    #[test]
    fn withdraw_within_balance(opening in balance_strategy(), amount in amount_strategy()) {
        prop_assume!(amount <= opening);
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", opening);

        prop_assert_eq!(ledger.withdraw(&id, amount), Ok(opening - amount));
        prop_assert_eq!(balance(&ledger, &id), opening - amount);
    }

    #[test]
    fn withdraw_over_balance_is_rejected(opening in balance_strategy(), excess in amount_strategy()) {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", opening);

        prop_assert_eq!(
            ledger.withdraw(&id, opening + excess),
            Err(LedgerError::Account(AccountError::InsufficientFunds))
        );
        prop_assert_eq!(balance(&ledger, &id), opening);
    }

    #[test]
    fn non_positive_withdraw_is_rejected(opening in balance_strategy(), amount in non_positive_strategy()) {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", opening);

        prop_assert_eq!(
            ledger.withdraw(&id, amount),
            Err(LedgerError::Account(AccountError::InsufficientFunds))
        );
        prop_assert_eq!(balance(&ledger, &id), opening);
    }

    #[test]
    fn transfer_conserves_money(
        sender in balance_strategy(),
        recipient in balance_strategy(),
        amount in amount_strategy(),
    ) {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", sender);
        let bob = ledger.create_account("Bob", recipient);
        let total = ledger.total_balance();
        prop_assert!(total.is_some());

        match ledger.transfer(&alice, &bob, amount) {
            Ok(()) => {
                prop_assert!(amount <= sender);
                prop_assert_eq!(balance(&ledger, &alice), sender - amount);
                prop_assert_eq!(balance(&ledger, &bob), recipient + amount);
            }
            Err(error) => {
                prop_assert!(amount > sender);
                prop_assert_eq!(error, LedgerError::Account(AccountError::InsufficientFunds));
                prop_assert_eq!(balance(&ledger, &alice), sender);
                prop_assert_eq!(balance(&ledger, &bob), recipient);
            }
        }
        prop_assert_eq!(ledger.total_balance(), total);
    }

    #[test]
    fn transfer_to_unknown_account_moves_nothing(opening in balance_strategy(), amount in amount_strategy()) {
        let mut ledger = Ledger::new();
        let alice = ledger.create_account("Alice", opening);
        let unknown = AccountId::from("999");

        prop_assert_eq!(
            ledger.transfer(&alice, &unknown, amount),
            Err(LedgerError::AccountNotFound(unknown.clone()))
        );
        prop_assert_eq!(
            ledger.transfer(&unknown, &alice, amount),
            Err(LedgerError::AccountNotFound(unknown))
        );
        prop_assert_eq!(balance(&ledger, &alice), opening);
    }

    #[test]
    fn identifiers_are_sequential(count in 1usize..64) {
        let mut ledger = Ledger::new();
        let ids = (0..count)
            .map(|n| ledger.create_account(format!("holder {}", n), Amount::ZERO))
            .collect::<Vec<_>>();

        for (offset, id) in ids.iter().enumerate() {
            prop_assert_eq!(id.to_string(), (FIRST_ACCOUNT_NUMBER + offset as u64).to_string());
        }
        prop_assert_eq!(ledger.len(), count);
    }
}

proptest! {
    #[test]
    fn tenths_add_up_exactly(count in 1u32..100) {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", Amount::ZERO);
        for _ in 0..count {
            ledger.deposit(&id, "0.1".parse().unwrap()).unwrap();
        }

        prop_assert_eq!(balance(&ledger, &id), Amount::new(i64::from(count), 1));
    }
}

#[test]
fn find_unknown_account() {
    let mut ledger = Ledger::new();
    ledger.create_account("Alice", dec!(10));

    let unknown = AccountId::from("1002");
    assert!(matches!(
        ledger.find_account(&unknown),
        Err(LedgerError::AccountNotFound(id)) if id == unknown
    ));
}

#[test]
fn end_to_end_scenario() {
    let mut ledger = Ledger::new();
    let alice = ledger.create_account("Alice", dec!(100));
    let bob = ledger.create_account("Bob", dec!(50));
    assert_eq!(alice.as_str(), "1001");
    assert_eq!(bob.as_str(), "1002");

    ledger.transfer(&alice, &bob, dec!(30)).unwrap();
    assert_eq!(balance(&ledger, &alice), dec!(70));
    assert_eq!(balance(&ledger, &bob), dec!(80));

    assert_eq!(
        ledger.withdraw(&alice, dec!(1000)),
        Err(LedgerError::Account(AccountError::InsufficientFunds)),
    );
    assert_eq!(balance(&ledger, &alice), dec!(70));
}
