//! Wallet balance bookkeeping.
//!
//! The balance is tracked in contract storage rather than read from the
//! asset token, so only value that came in through `deposit` can leave
//! through a fulfilled request.

use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::errors::WalletError;
use crate::events::Deposited;
use crate::types::DataKey;

pub fn init(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    env.storage().instance().set(&DataKey::Balance, &0i128);
}

pub fn asset(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::InvalidConfiguration))
}

pub fn balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance)
        .unwrap_or(0i128)
}

fn set_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::Balance, &balance);
}

/// Pulls `amount` of the asset from `from` into the wallet and credits it.
/// Returns the new balance.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<i128, WalletError> {
    if amount <= 0 {
        return Err(WalletError::InvalidAmount);
    }

    let new_balance = balance(env)
        .checked_add(amount)
        .ok_or(WalletError::InvalidAmount)?;

    token::Client::new(env, &asset(env)).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
    set_balance(env, new_balance);

    Deposited {
        from: from.clone(),
        amount,
        balance: new_balance,
    }
    .publish(env);

    Ok(new_balance)
}

/// Debits `amount` and pays it out to `recipient`.
///
/// Callers are expected to have checked the balance already; the check
/// here keeps the balance from ever going negative.
pub fn transfer(env: &Env, recipient: &Address, amount: i128) -> Result<(), WalletError> {
    let current = balance(env);
    if current < amount {
        return Err(WalletError::InsufficientFunds);
    }

    set_balance(env, current - amount);
    token::Client::new(env, &asset(env)).transfer(
        &env.current_contract_address(),
        recipient,
        &amount,
    );
    Ok(())
}
