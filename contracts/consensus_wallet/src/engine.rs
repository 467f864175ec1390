//! Voting state machine shared by the transaction and owner-change ledgers.
//!
//! A ledger describes where its records live and what finalizing one does;
//! the engine owns the guards, the tally and the status transitions. The
//! majority threshold is read from the owner set on every call, so an
//! ownership change applies to every open proposal immediately.

use soroban_sdk::{log, Address, ConversionError, Env, IntoVal, Symbol, TryFromVal, Val};

use crate::errors::WalletError;
use crate::events::{CANCELED, CONFIRMED, EXECUTED, EXPIRED, REJECTED, SUBMITTED};
use crate::owners::{self, OwnerSet};
use crate::storage;
use crate::types::{Ballot, DataKey, ProposalStatus, Vote};

/// Longest allowed distance between submission and expiry (30 days).
pub const MAX_EXPIRY_WINDOW: u64 = 2_592_000;

pub(crate) trait ProposalLedger {
    type Record: Clone + IntoVal<Env, Val> + TryFromVal<Env, Val, Error = ConversionError>;

    const NOT_FOUND: WalletError;

    fn count_key() -> DataKey;
    fn record_key(index: u64) -> DataKey;
    fn vote_key(index: u64, voter: Address) -> DataKey;

    fn ballot(record: &Self::Record) -> &Ballot;
    fn ballot_mut(record: &mut Self::Record) -> &mut Ballot;

    /// Side effect of a successful vote. An error aborts the finalize.
    fn apply(env: &Env, record: &Self::Record) -> Result<(), WalletError>;

    fn publish(env: &Env, transition: Symbol, index: u64, actor: Option<Address>);
}

/// Opens a ballot for `proposer`, validating the expiry window.
pub(crate) fn open_ballot(
    env: &Env,
    proposer: &Address,
    expires_at: u64,
) -> Result<Ballot, WalletError> {
    let now = env.ledger().timestamp();
    if expires_at <= now || expires_at - now > MAX_EXPIRY_WINDOW {
        return Err(WalletError::InvalidExpiry);
    }
    Ok(Ballot {
        proposer: proposer.clone(),
        status: ProposalStatus::Pending,
        confirmations: 0,
        rejections: 0,
        created_at: now,
        expires_at,
    })
}

/// Appends `record` to the ledger and returns its index.
pub(crate) fn append<L: ProposalLedger>(env: &Env, record: &L::Record) -> u64 {
    let index = storage::read_count(env, &L::count_key());
    storage::write_record(env, &L::record_key(index), record);
    storage::write_count(env, &L::count_key(), index + 1);
    L::publish(env, SUBMITTED, index, Some(L::ballot(record).proposer.clone()));
    index
}

pub(crate) fn load<L: ProposalLedger>(env: &Env, index: u64) -> Result<L::Record, WalletError> {
    if index >= storage::read_count(env, &L::count_key()) {
        return Err(L::NOT_FOUND);
    }
    let key = L::record_key(index);
    let record = storage::read_record(env, &key).ok_or(L::NOT_FOUND)?;
    storage::touch_record(env, &key);
    Ok(record)
}

pub(crate) fn vote_of<L: ProposalLedger>(env: &Env, index: u64, voter: &Address) -> Vote {
    storage::read_vote(env, &L::vote_key(index, voter.clone()))
}

fn ensure_open(env: &Env, ballot: &Ballot) -> Result<(), WalletError> {
    if ballot.status != ProposalStatus::Pending {
        return Err(WalletError::AlreadyFinalized);
    }
    if env.ledger().timestamp() > ballot.expires_at {
        return Err(WalletError::ProposalExpired);
    }
    Ok(())
}

pub(crate) fn confirm<L: ProposalLedger>(
    env: &Env,
    voter: &Address,
    index: u64,
) -> Result<ProposalStatus, WalletError> {
    cast::<L>(env, voter, index, Vote::Confirm)
}

pub(crate) fn reject<L: ProposalLedger>(
    env: &Env,
    voter: &Address,
    index: u64,
) -> Result<ProposalStatus, WalletError> {
    cast::<L>(env, voter, index, Vote::Reject)
}

fn cast<L: ProposalLedger>(
    env: &Env,
    voter: &Address,
    index: u64,
    vote: Vote,
) -> Result<ProposalStatus, WalletError> {
    owners::require_owner(env, voter)?;
    let mut record = load::<L>(env, index)?;
    ensure_open(env, L::ballot(&record))?;

    let vote_key = L::vote_key(index, voter.clone());
    if storage::read_vote(env, &vote_key) != Vote::None {
        return Err(WalletError::AlreadyVoted);
    }
    storage::write_vote(env, &vote_key, vote);

    let threshold = OwnerSet::load(env).majority_threshold();
    let ballot = L::ballot_mut(&mut record);
    let decided = if vote == Vote::Confirm {
        ballot.confirmations += 1;
        L::publish(env, CONFIRMED, index, Some(voter.clone()));
        ballot.confirmations >= threshold
    } else {
        ballot.rejections += 1;
        L::publish(env, REJECTED, index, Some(voter.clone()));
        ballot.rejections >= threshold
    };

    match (decided, vote) {
        (true, Vote::Confirm) => finalize_executed::<L>(env, index, record, voter),
        (true, _) => {
            L::ballot_mut(&mut record).status = ProposalStatus::Canceled;
            storage::write_record(env, &L::record_key(index), &record);
            L::publish(env, CANCELED, index, Some(voter.clone()));
            Ok(ProposalStatus::Canceled)
        }
        (false, _) => {
            storage::write_record(env, &L::record_key(index), &record);
            Ok(ProposalStatus::Pending)
        }
    }
}

/// Explicit re-check for a proposal whose confirmations meet the threshold
/// but which was not finalized at vote time.
pub(crate) fn execute<L: ProposalLedger>(
    env: &Env,
    caller: &Address,
    index: u64,
) -> Result<ProposalStatus, WalletError> {
    owners::require_owner(env, caller)?;
    let record = load::<L>(env, index)?;
    let ballot = L::ballot(&record);
    ensure_open(env, ballot)?;

    if ballot.confirmations < OwnerSet::load(env).majority_threshold() {
        return Err(WalletError::InsufficientConfirmations);
    }
    finalize_executed::<L>(env, index, record, caller)
}

/// Permissionless claim on an overdue proposal.
pub(crate) fn mark_expired<L: ProposalLedger>(env: &Env, index: u64) -> Result<(), WalletError> {
    let mut record = load::<L>(env, index)?;
    let ballot = L::ballot_mut(&mut record);
    if ballot.status != ProposalStatus::Pending {
        return Err(WalletError::AlreadyFinalized);
    }
    if env.ledger().timestamp() <= ballot.expires_at {
        return Err(WalletError::NotExpired);
    }
    ballot.status = ProposalStatus::Canceled;
    storage::write_record(env, &L::record_key(index), &record);
    L::publish(env, EXPIRED, index, None);
    Ok(())
}

fn finalize_executed<L: ProposalLedger>(
    env: &Env,
    index: u64,
    mut record: L::Record,
    actor: &Address,
) -> Result<ProposalStatus, WalletError> {
    L::apply(env, &record)?;
    L::ballot_mut(&mut record).status = ProposalStatus::Executed;
    storage::write_record(env, &L::record_key(index), &record);
    log!(env, "proposal executed", index);
    L::publish(env, EXECUTED, index, Some(actor.clone()));
    Ok(ProposalStatus::Executed)
}
