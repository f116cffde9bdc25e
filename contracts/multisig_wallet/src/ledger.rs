//! Append-only log of transfer requests.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::events::RequestCreated;
use crate::owners;
use crate::types::{DataKey, TransferRequest};

const DAY_IN_LEDGERS: u32 = 17280;
const REQUEST_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const REQUEST_LIFETIME_THRESHOLD: u32 = REQUEST_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Requests live in persistent storage, one entry each, so the instance
// entry stays the same size however long the log grows.
fn store(env: &Env, request: &TransferRequest) {
    let key = DataKey::Request(request.id);
    env.storage().persistent().set(&key, request);
    env.storage()
        .persistent()
        .extend_ttl(&key, REQUEST_LIFETIME_THRESHOLD, REQUEST_BUMP_AMOUNT);
}

fn load(env: &Env, id: u64) -> Option<TransferRequest> {
    env.storage().persistent().get(&DataKey::Request(id))
}

pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RequestCount)
        .unwrap_or(0u64)
}

/// Appends a new pending request and returns its id. Ids start at 0.
pub fn create_request(
    env: &Env,
    requestor: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<u64, WalletError> {
    owners::require_owner(env, requestor)?;

    if amount <= 0 {
        return Err(WalletError::InvalidAmount);
    }

    let id = count(env);
    let request = TransferRequest {
        id,
        requestor: requestor.clone(),
        recipient: recipient.clone(),
        amount,
        approved_by: Vec::new(env),
        fulfilled: false,
    };

    store(env, &request);
    env.storage().instance().set(&DataKey::RequestCount, &(id + 1));

    RequestCreated {
        id,
        requestor: requestor.clone(),
        recipient: recipient.clone(),
        amount,
    }
    .publish(env);

    Ok(id)
}

pub fn get_request(env: &Env, id: u64) -> Result<TransferRequest, WalletError> {
    if id >= count(env) {
        return Err(WalletError::InvalidRequestId);
    }

    load(env, id).ok_or(WalletError::InvalidRequestId)
}

pub fn list_requests(env: &Env) -> Vec<TransferRequest> {
    let mut requests = Vec::new(env);
    for id in 0..count(env) {
        if let Some(request) = load(env, id) {
            requests.push_back(request);
        }
    }
    requests
}

/// Overwrites a request that already exists in the log.
pub(crate) fn save(env: &Env, request: &TransferRequest) {
    store(env, request);
}
