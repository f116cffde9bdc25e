use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::TransferRequest;
use crate::{approval, funds, ledger, owners};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Sets up the owner set, the approval threshold and the asset the
    /// wallet holds. None of these change afterwards.
    pub fn __constructor(env: Env, required_approvals: u32, owners: Vec<Address>, token: Address) {
        if let Err(err) = owners::init(&env, &owners, required_approvals) {
            panic_with_error!(&env, err);
        }
        funds::init(&env, &token);
    }

    /// Moves `amount` of the wallet asset from `from` into the wallet.
    /// Anyone may deposit.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        from.require_auth();
        funds::deposit(&env, &from, amount)?;
        Ok(())
    }

    /// Proposes paying `amount` to `recipient`. Owners only.
    pub fn transfer_request(
        env: Env,
        requestor: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, WalletError> {
        requestor.require_auth();
        ledger::create_request(&env, &requestor, &recipient, amount)
    }

    /// Records `approver`'s vote on request `id`, and executes the transfer
    /// when this vote reaches quorum. If quorum is reached but the wallet
    /// cannot cover the amount, the call fails and the vote is not kept.
    pub fn approve_request(env: Env, id: u64, approver: Address) -> Result<(), WalletError> {
        approver.require_auth();
        approval::approve(&env, id, &approver)?;
        Ok(())
    }

    pub fn nb_approvers(env: Env) -> u32 {
        owners::required_approvals(&env)
    }

    pub fn get_owners_list(env: Env) -> Vec<Address> {
        owners::list(&env)
    }

    pub fn get_list_of_transfer(env: Env) -> Vec<TransferRequest> {
        ledger::list_requests(&env)
    }

    pub fn get_request(env: Env, id: u64) -> Result<TransferRequest, WalletError> {
        ledger::get_request(&env, id)
    }

    pub fn request_count(env: Env) -> u64 {
        ledger::count(&env)
    }

    pub fn is_owner(env: Env, identity: Address) -> bool {
        owners::is_owner(&env, &identity)
    }

    pub fn balance(env: Env) -> i128 {
        funds::balance(&env)
    }

    pub fn token(env: Env) -> Address {
        funds::asset(&env)
    }
}
