use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owners,
    RequiredApprovals,
    Token,
    Balance,
    RequestCount,
    Request(u64),
}

/// An outbound payment proposed by an owner and tracked until quorum.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferRequest {
    pub id: u64,
    pub requestor: Address,
    pub recipient: Address,
    pub amount: i128,
    /// Owners that approved, in approval order.
    pub approved_by: Vec<Address>,
    pub fulfilled: bool,
}

impl TransferRequest {
    pub fn has_approved(&self, owner: &Address) -> bool {
        self.approved_by.contains(owner)
    }

    pub fn approvals(&self) -> u32 {
        self.approved_by.len()
    }
}
