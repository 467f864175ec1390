use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    WalletAlreadyRegistered = 1,
    UnknownWallet = 2,
    EmptyOwners = 3,
}
