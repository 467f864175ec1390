use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    WalletCount,
    Wallet(Address),
    OwnerWallets(Address),
}
