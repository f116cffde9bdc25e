//! Owner registry: the fixed set of addresses allowed to propose and
//! approve transfers, plus the number of approvals a transfer needs.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

/// Checks a registry configuration before anything is stored.
///
/// The owner list must be non-empty and free of duplicates, and the
/// threshold must lie in `1..=owners.len()`.
pub fn validate(owners: &Vec<Address>, required_approvals: u32) -> Result<(), WalletError> {
    if owners.is_empty() {
        return Err(WalletError::InvalidConfiguration);
    }

    if required_approvals == 0 || required_approvals > owners.len() {
        return Err(WalletError::InvalidConfiguration);
    }

    for i in 0..owners.len() {
        for j in (i + 1)..owners.len() {
            if owners.get_unchecked(i) == owners.get_unchecked(j) {
                return Err(WalletError::InvalidConfiguration);
            }
        }
    }

    Ok(())
}

pub fn init(env: &Env, owners: &Vec<Address>, required_approvals: u32) -> Result<(), WalletError> {
    validate(owners, required_approvals)?;

    env.storage().instance().set(&DataKey::Owners, owners);
    env.storage().instance().set(&DataKey::RequiredApprovals, &required_approvals);
    Ok(())
}

pub fn list(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or(Vec::new(env))
}

pub fn required_approvals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RequiredApprovals)
        .unwrap_or(0)
}

pub fn is_owner(env: &Env, identity: &Address) -> bool {
    list(env).contains(identity)
}

pub fn require_owner(env: &Env, identity: &Address) -> Result<(), WalletError> {
    if !is_owner(env, identity) {
        return Err(WalletError::NotAuthorized);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn owners(env: &Env, count: u32) -> Vec<Address> {
        let mut owners = Vec::new(env);
        for _ in 0..count {
            owners.push_back(Address::generate(env));
        }
        owners
    }

    #[test]
    fn accepts_threshold_within_owner_count() {
        let env = Env::default();
        let owners = owners(&env, 3);

        assert_eq!(validate(&owners, 1), Ok(()));
        assert_eq!(validate(&owners, 3), Ok(()));
    }

    #[test]
    fn rejects_zero_threshold() {
        let env = Env::default();
        assert_eq!(
            validate(&owners(&env, 3), 0),
            Err(WalletError::InvalidConfiguration)
        );
    }

    #[test]
    fn rejects_threshold_above_owner_count() {
        let env = Env::default();
        assert_eq!(
            validate(&owners(&env, 3), 4),
            Err(WalletError::InvalidConfiguration)
        );
    }

    #[test]
    fn rejects_empty_owner_list() {
        let env = Env::default();
        assert_eq!(
            validate(&Vec::new(&env), 1),
            Err(WalletError::InvalidConfiguration)
        );
    }

    #[test]
    fn rejects_duplicate_owner() {
        let env = Env::default();
        let mut owners = owners(&env, 2);
        owners.push_back(owners.get_unchecked(0));

        assert_eq!(validate(&owners, 2), Err(WalletError::InvalidConfiguration));
    }
}
