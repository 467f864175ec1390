#![no_std]

mod errors;
mod registry;
mod types;

pub use errors::RegistryError;
pub use registry::{WalletOwnersUpdated, WalletRegistered, WalletRegistry, WalletRegistryClient};
