use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    InvalidConfiguration = 1,
    NotAuthorized = 2,
    InvalidRequestId = 3,
    InvalidAmount = 4,
    AlreadyApproved = 5,
    AlreadyFulfilled = 6,
    InsufficientFunds = 7,
}
