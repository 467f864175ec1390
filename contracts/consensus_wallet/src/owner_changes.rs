use soroban_sdk::{Address, Env, Symbol};

use crate::engine::{self, ProposalLedger};
use crate::errors::WalletError;
use crate::events::OwnerProposalEvent;
use crate::external;
use crate::owners::{self, OwnerSet};
use crate::storage;
use crate::types::{Ballot, DataKey, OwnerChangeKind, OwnerProposal};

pub(crate) struct OwnerChangeLedger;

impl ProposalLedger for OwnerChangeLedger {
    type Record = OwnerProposal;

    const NOT_FOUND: WalletError = WalletError::OwnerProposalNotFound;

    fn count_key() -> DataKey {
        DataKey::OwnerProposalCount
    }

    fn record_key(index: u64) -> DataKey {
        DataKey::OwnerProposal(index)
    }

    fn vote_key(index: u64, voter: Address) -> DataKey {
        DataKey::OwnerProposalVote(index, voter)
    }

    fn ballot(record: &OwnerProposal) -> &Ballot {
        &record.ballot
    }

    fn ballot_mut(record: &mut OwnerProposal) -> &mut Ballot {
        &mut record.ballot
    }

    fn apply(env: &Env, record: &OwnerProposal) -> Result<(), WalletError> {
        let mut owners = OwnerSet::load(env);
        match record.kind {
            OwnerChangeKind::Add => owners.add(record.target.clone())?,
            OwnerChangeKind::Remove => owners.remove(&record.target)?,
        }
        owners.save(env);

        let config = storage::read_config(env)?;
        external::sync_registry(env, &config, &owners.to_vec())
    }

    fn publish(env: &Env, transition: Symbol, index: u64, actor: Option<Address>) {
        OwnerProposalEvent {
            transition,
            index,
            actor,
        }
        .publish(env);
    }
}

/// Opens an add/remove proposal. The two-owner floor is enforced when the
/// proposal executes, not here.
pub(crate) fn propose(
    env: &Env,
    proposer: &Address,
    target: Address,
    kind: OwnerChangeKind,
    expires_at: u64,
) -> Result<u64, WalletError> {
    owners::require_owner(env, proposer)?;
    if target == env.current_contract_address() {
        return Err(WalletError::InvalidTarget);
    }

    let is_owner = OwnerSet::load(env).contains(&target);
    match kind {
        OwnerChangeKind::Add if is_owner => return Err(WalletError::AlreadyOwner),
        OwnerChangeKind::Remove if !is_owner => return Err(WalletError::NotAnOwner),
        _ => {}
    }

    let proposal = OwnerProposal {
        ballot: engine::open_ballot(env, proposer, expires_at)?,
        target,
        kind,
    };
    Ok(engine::append::<OwnerChangeLedger>(env, &proposal))
}
