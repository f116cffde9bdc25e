//! The approval state machine.
//!
//! A request is `Pending` until the approval that brings it to quorum
//! also finds enough balance, at which point the transfer executes and the
//! request becomes `Fulfilled` for good. Voting and execution happen in
//! the same call: a quorum-reaching approval that cannot be paid is
//! rejected as a whole, vote included.

use soroban_sdk::{log, Address, Env};

use crate::errors::WalletError;
use crate::events::{RequestApproved, RequestFulfilled};
use crate::types::TransferRequest;
use crate::{funds, ledger, owners};

/// What an accepted approval did to its request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Approval {
    /// Recorded, quorum not reached yet.
    Pending { approvals: u32 },
    /// Quorum reached and the transfer executed.
    Fulfilled,
}

pub fn approve(env: &Env, id: u64, approver: &Address) -> Result<Approval, WalletError> {
    owners::require_owner(env, approver)?;

    let mut request = ledger::get_request(env, id)?;

    if request.fulfilled {
        return Err(WalletError::AlreadyFulfilled);
    }

    if request.has_approved(approver) {
        return Err(WalletError::AlreadyApproved);
    }

    // Nothing is written until every check below has passed.
    request.approved_by.push_back(approver.clone());
    let approvals = request.approvals();

    if approvals < owners::required_approvals(env) {
        ledger::save(env, &request);
        publish_approval(env, &request, approver);
        log!(env, "request pending", id, approvals);
        return Ok(Approval::Pending { approvals });
    }

    if funds::balance(env) < request.amount {
        log!(env, "request rejected, insufficient funds", id, request.amount);
        return Err(WalletError::InsufficientFunds);
    }

    funds::transfer(env, &request.recipient, request.amount)?;
    request.fulfilled = true;
    ledger::save(env, &request);

    publish_approval(env, &request, approver);
    RequestFulfilled {
        id,
        recipient: request.recipient.clone(),
        amount: request.amount,
    }
    .publish(env);
    log!(env, "request fulfilled", id, request.amount);

    Ok(Approval::Fulfilled)
}

fn publish_approval(env: &Env, request: &TransferRequest, approver: &Address) {
    RequestApproved {
        id: request.id,
        approver: approver.clone(),
        approvals: request.approvals(),
    }
    .publish(env);
}
