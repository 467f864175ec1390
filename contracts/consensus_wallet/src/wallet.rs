use soroban_sdk::{contract, contractimpl, token, Address, Bytes, Env, Vec};

use crate::engine::{self, ProposalLedger};
use crate::errors::WalletError;
use crate::external;
use crate::owner_changes::{self, OwnerChangeLedger};
use crate::owners::OwnerSet;
use crate::storage;
use crate::transactions::{self, TransactionLedger};
use crate::types::{
    NotifyPolicy, OwnerChangeKind, OwnerProposal, ProposalStatus, TransactionProposal, Vote,
    WalletConfig,
};

#[contract]
pub struct ConsensusWallet;

#[contractimpl]
impl ConsensusWallet {
    /// Sets up the owner set and configuration, then registers the wallet
    /// with `registry`. Needs at least two distinct owners.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        registry: Address,
        native_asset: Address,
        notify_policy: NotifyPolicy,
    ) -> Result<(), WalletError> {
        if storage::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }

        let owner_set = OwnerSet::from_list(&env, &owners)?;
        let config = WalletConfig {
            registry,
            native_asset,
            notify_policy,
        };

        owner_set.save(&env);
        storage::write_config(&env, &config);
        storage::bump_instance(&env);

        external::register_wallet(&env, &config, &owner_set.to_vec())
    }

    pub fn submit_transaction(
        env: Env,
        caller: Address,
        destination: Address,
        value: i128,
        payload: Bytes,
        expires_at: u64,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        transactions::submit(&env, &caller, destination, value, payload, expires_at)
    }

    pub fn confirm_transaction(
        env: Env,
        caller: Address,
        index: u64,
    ) -> Result<ProposalStatus, WalletError> {
        Self::require_initialized(&env)?;
        engine::confirm::<TransactionLedger>(&env, &caller, index)
    }

    pub fn reject_transaction(
        env: Env,
        caller: Address,
        index: u64,
    ) -> Result<ProposalStatus, WalletError> {
        Self::require_initialized(&env)?;
        engine::reject::<TransactionLedger>(&env, &caller, index)
    }

    pub fn execute_transaction(
        env: Env,
        caller: Address,
        index: u64,
    ) -> Result<ProposalStatus, WalletError> {
        Self::require_initialized(&env)?;
        engine::execute::<TransactionLedger>(&env, &caller, index)
    }

    /// Cancels a transaction whose deadline has passed. Anyone may call it.
    pub fn mark_transaction_expired(env: Env, index: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        engine::mark_expired::<TransactionLedger>(&env, index)
    }

    pub fn propose_owner_change(
        env: Env,
        caller: Address,
        target: Address,
        kind: OwnerChangeKind,
        expires_at: u64,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        owner_changes::propose(&env, &caller, target, kind, expires_at)
    }

    pub fn confirm_owner_proposal(
        env: Env,
        caller: Address,
        index: u64,
    ) -> Result<ProposalStatus, WalletError> {
        Self::require_initialized(&env)?;
        engine::confirm::<OwnerChangeLedger>(&env, &caller, index)
    }

    pub fn reject_owner_proposal(
        env: Env,
        caller: Address,
        index: u64,
    ) -> Result<ProposalStatus, WalletError> {
        Self::require_initialized(&env)?;
        engine::reject::<OwnerChangeLedger>(&env, &caller, index)
    }

    pub fn execute_owner_proposal(
        env: Env,
        caller: Address,
        index: u64,
    ) -> Result<ProposalStatus, WalletError> {
        Self::require_initialized(&env)?;
        engine::execute::<OwnerChangeLedger>(&env, &caller, index)
    }

    /// Cancels an owner proposal whose deadline has passed. Anyone may call it.
    pub fn mark_owner_proposal_expired(env: Env, index: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        engine::mark_expired::<OwnerChangeLedger>(&env, index)
    }

    /// Moves native asset from `from` into the wallet. No event is emitted.
    /// A zero amount is accepted and moves nothing.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        from.require_auth();
        let config = Self::require_initialized(&env)?;
        if amount < 0 {
            return Err(WalletError::InvalidValue);
        }
        if amount == 0 {
            return Ok(());
        }

        let asset = token::Client::new(&env, &config.native_asset);
        asset.transfer(&from, &env.current_contract_address(), &amount);
        Ok(())
    }

    pub fn get_transaction(env: Env, index: u64) -> Result<TransactionProposal, WalletError> {
        Self::require_initialized(&env)?;
        engine::load::<TransactionLedger>(&env, index)
    }

    pub fn transaction_count(env: Env) -> u64 {
        storage::read_count(&env, &TransactionLedger::count_key())
    }

    pub fn transaction_vote(env: Env, index: u64, voter: Address) -> Vote {
        engine::vote_of::<TransactionLedger>(&env, index, &voter)
    }

    pub fn get_owner_proposal(env: Env, index: u64) -> Result<OwnerProposal, WalletError> {
        Self::require_initialized(&env)?;
        engine::load::<OwnerChangeLedger>(&env, index)
    }

    pub fn owner_proposal_count(env: Env) -> u64 {
        storage::read_count(&env, &OwnerChangeLedger::count_key())
    }

    pub fn owner_proposal_vote(env: Env, index: u64, voter: Address) -> Vote {
        engine::vote_of::<OwnerChangeLedger>(&env, index, &voter)
    }

    /// Confirmations still missing before the transaction can execute under
    /// the current owner set.
    pub fn remaining_confirmations(env: Env, index: u64) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        let proposal = engine::load::<TransactionLedger>(&env, index)?;
        let threshold = OwnerSet::load(&env).majority_threshold();
        Ok(threshold.saturating_sub(proposal.ballot.confirmations))
    }

    pub fn owners(env: Env) -> Result<Vec<Address>, WalletError> {
        Self::require_initialized(&env)?;
        Ok(OwnerSet::load(&env).to_vec())
    }

    pub fn is_owner(env: Env, candidate: Address) -> bool {
        OwnerSet::load(&env).contains(&candidate)
    }

    pub fn owner_count(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(OwnerSet::load(&env).size())
    }

    pub fn threshold(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(OwnerSet::load(&env).majority_threshold())
    }

    pub fn balance(env: Env) -> Result<i128, WalletError> {
        let config = Self::require_initialized(&env)?;
        let asset = token::Client::new(&env, &config.native_asset);
        Ok(asset.balance(&env.current_contract_address()))
    }

    pub fn config(env: Env) -> Result<WalletConfig, WalletError> {
        Self::require_initialized(&env)
    }

    fn require_initialized(env: &Env) -> Result<WalletConfig, WalletError> {
        let config = storage::read_config(env)?;
        storage::bump_instance(env);
        Ok(config)
    }
}
