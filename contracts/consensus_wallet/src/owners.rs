use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

pub const MIN_OWNERS: u32 = 2;

/// Votes needed to finalize a proposal with `owner_count` owners.
pub fn majority_of(owner_count: u32) -> u32 {
    owner_count / 2 + 1
}

/// Membership index of the wallet.
///
/// Enumeration order is not stable: removal moves the last owner into the
/// vacated slot.
#[derive(Clone, Debug)]
pub struct OwnerSet {
    owners: Vec<Address>,
}

impl OwnerSet {
    pub fn from_list(env: &Env, initial: &Vec<Address>) -> Result<Self, WalletError> {
        let mut set = OwnerSet {
            owners: Vec::new(env),
        };
        for owner in initial.iter() {
            set.add(owner)?;
        }
        if set.size() < MIN_OWNERS {
            return Err(WalletError::TooFewOwners);
        }
        Ok(set)
    }

    pub fn load(env: &Env) -> Self {
        OwnerSet {
            owners: env
                .storage()
                .instance()
                .get(&DataKey::Owners)
                .unwrap_or(Vec::new(env)),
        }
    }

    pub fn save(&self, env: &Env) {
        env.storage().instance().set(&DataKey::Owners, &self.owners);
    }

    pub fn add(&mut self, owner: Address) -> Result<(), WalletError> {
        if self.contains(&owner) {
            return Err(WalletError::DuplicateOwner);
        }
        self.owners.push_back(owner);
        Ok(())
    }

    pub fn remove(&mut self, owner: &Address) -> Result<(), WalletError> {
        let position = self
            .owners
            .first_index_of(owner)
            .ok_or(WalletError::OwnerNotFound)?;
        if self.size() - 1 < MIN_OWNERS {
            return Err(WalletError::CannotRemoveLastOwner);
        }
        let last = self.size() - 1;
        if position != last {
            let moved = self.owners.get_unchecked(last);
            self.owners.set(position, moved);
        }
        self.owners.pop_back();
        Ok(())
    }

    pub fn contains(&self, owner: &Address) -> bool {
        self.owners.contains(owner)
    }

    pub fn size(&self) -> u32 {
        self.owners.len()
    }

    pub fn majority_threshold(&self) -> u32 {
        majority_of(self.size())
    }

    pub fn to_vec(&self) -> Vec<Address> {
        self.owners.clone()
    }
}

/// Authenticates `caller` and checks current membership.
pub(crate) fn require_owner(env: &Env, caller: &Address) -> Result<(), WalletError> {
    caller.require_auth();
    if !OwnerSet::load(env).contains(caller) {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}
