#![no_std]

mod approval;
mod contract;
mod errors;
mod events;
mod funds;
mod ledger;
mod owners;
mod types;

pub use contract::*;
pub use errors::WalletError;
pub use types::TransferRequest;
