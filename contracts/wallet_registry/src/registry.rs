use soroban_sdk::{contract, contractevent, contractimpl, Address, Env, Vec};

use crate::errors::RegistryError;
use crate::types::DataKey;

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletRegistered {
    #[topic]
    pub wallet: Address,
    pub owners: Vec<Address>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletOwnersUpdated {
    #[topic]
    pub wallet: Address,
    pub owners: Vec<Address>,
}

/// Index of wallets per owner.
///
/// Entries are only ever appended: an owner removed from a wallet keeps the
/// wallet in its list.
#[contract]
pub struct WalletRegistry;

#[contractimpl]
impl WalletRegistry {
    /// Records `wallet` as a known wallet. Must be invoked by the wallet itself.
    pub fn register_wallet(
        env: Env,
        wallet: Address,
        owners: Vec<Address>,
    ) -> Result<(), RegistryError> {
        wallet.require_auth();

        if owners.is_empty() {
            return Err(RegistryError::EmptyOwners);
        }
        let key = DataKey::Wallet(wallet.clone());
        if env.storage().persistent().has(&key) {
            return Err(RegistryError::WalletAlreadyRegistered);
        }

        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
        let count: u32 = env.storage().instance().get(&DataKey::WalletCount).unwrap_or(0);
        env.storage().instance().set(&DataKey::WalletCount, &(count + 1));

        Self::index_owners(&env, &wallet, &owners);
        WalletRegistered { wallet, owners }.publish(&env);
        Ok(())
    }

    /// Adds `wallet` to the index of every owner in the new list.
    pub fn update_wallet_owners(
        env: Env,
        wallet: Address,
        owners: Vec<Address>,
    ) -> Result<(), RegistryError> {
        wallet.require_auth();

        if !Self::is_wallet(env.clone(), wallet.clone()) {
            return Err(RegistryError::UnknownWallet);
        }

        Self::index_owners(&env, &wallet, &owners);
        WalletOwnersUpdated { wallet, owners }.publish(&env);
        Ok(())
    }

    pub fn wallets_of(env: Env, owner: Address) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::OwnerWallets(owner))
            .unwrap_or(Vec::new(&env))
    }

    pub fn is_wallet(env: Env, wallet: Address) -> bool {
        env.storage().persistent().has(&DataKey::Wallet(wallet))
    }

    pub fn wallet_count(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::WalletCount).unwrap_or(0)
    }

    fn index_owners(env: &Env, wallet: &Address, owners: &Vec<Address>) {
        for owner in owners.iter() {
            let key = DataKey::OwnerWallets(owner);
            let mut wallets: Vec<Address> = env
                .storage()
                .persistent()
                .get(&key)
                .unwrap_or(Vec::new(env));
            if wallets.contains(wallet) {
                continue;
            }
            wallets.push_back(wallet.clone());
            env.storage().persistent().set(&key, &wallets);
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
        }
    }
}
