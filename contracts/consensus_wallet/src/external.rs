use soroban_sdk::{contractclient, log, token, Address, Bytes, Env, Vec};

use crate::errors::WalletError;
use crate::events::RegistrySyncFailed;
use crate::types::{NotifyPolicy, TransactionProposal, WalletConfig};

/// Calls the wallet makes on its registry. The registry authenticates the
/// wallet as the direct invoker.
#[contractclient(name = "RegistryClient")]
pub trait WalletRegistryInterface {
    fn register_wallet(env: Env, wallet: Address, owners: Vec<Address>);
    fn update_wallet_owners(env: Env, wallet: Address, owners: Vec<Address>);
}

/// Entry point invoked on a destination when a transaction carries a payload.
#[contractclient(name = "ExecutionSinkClient")]
pub trait ExecutionSink {
    fn execute(env: Env, wallet: Address, value: i128, payload: Bytes);
}

pub(crate) fn register_wallet(
    env: &Env,
    config: &WalletConfig,
    owners: &Vec<Address>,
) -> Result<(), WalletError> {
    let registry = RegistryClient::new(env, &config.registry);
    match registry.try_register_wallet(&env.current_contract_address(), owners) {
        Ok(Ok(())) => Ok(()),
        _ => Err(WalletError::RegistryNotifyFailed),
    }
}

/// Pushes the full owner list to the registry, honoring the notify policy.
pub(crate) fn sync_registry(
    env: &Env,
    config: &WalletConfig,
    owners: &Vec<Address>,
) -> Result<(), WalletError> {
    let registry = RegistryClient::new(env, &config.registry);
    if let Ok(Ok(())) = registry.try_update_wallet_owners(&env.current_contract_address(), owners) {
        return Ok(());
    }

    match config.notify_policy {
        NotifyPolicy::Fatal => Err(WalletError::RegistryNotifyFailed),
        NotifyPolicy::Advisory => {
            log!(env, "registry rejected owner update", config.registry);
            RegistrySyncFailed {
                registry: config.registry.clone(),
                owners: owners.clone(),
            }
            .publish(env);
            Ok(())
        }
    }
}

/// Moves `value` of the native asset to the destination, then hands the
/// payload to it. Funds come from the wallet's own balance.
pub(crate) fn invoke_destination(
    env: &Env,
    config: &WalletConfig,
    proposal: &TransactionProposal,
) -> Result<(), WalletError> {
    let wallet = env.current_contract_address();

    if proposal.value > 0 {
        let asset = token::Client::new(env, &config.native_asset);
        let transferred = asset.try_transfer(&wallet, &proposal.destination, &proposal.value);
        if !matches!(transferred, Ok(Ok(()))) {
            log!(env, "native transfer failed", proposal.destination, proposal.value);
            return Err(WalletError::ExecutionFailed);
        }
    }

    if !proposal.payload.is_empty() {
        let sink = ExecutionSinkClient::new(env, &proposal.destination);
        let invoked = sink.try_execute(&wallet, &proposal.value, &proposal.payload);
        if !matches!(invoked, Ok(Ok(()))) {
            log!(env, "destination call failed", proposal.destination);
            return Err(WalletError::ExecutionFailed);
        }
    }

    Ok(())
}
