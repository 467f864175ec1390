use soroban_sdk::{Address, Bytes, Env, Symbol};

use crate::engine::{self, ProposalLedger};
use crate::errors::WalletError;
use crate::events::TransactionEvent;
use crate::external;
use crate::owners;
use crate::storage;
use crate::types::{Ballot, DataKey, TransactionProposal};

pub(crate) struct TransactionLedger;

impl ProposalLedger for TransactionLedger {
    type Record = TransactionProposal;

    const NOT_FOUND: WalletError = WalletError::TransactionNotFound;

    fn count_key() -> DataKey {
        DataKey::TransactionCount
    }

    fn record_key(index: u64) -> DataKey {
        DataKey::Transaction(index)
    }

    fn vote_key(index: u64, voter: Address) -> DataKey {
        DataKey::TransactionVote(index, voter)
    }

    fn ballot(record: &TransactionProposal) -> &Ballot {
        &record.ballot
    }

    fn ballot_mut(record: &mut TransactionProposal) -> &mut Ballot {
        &mut record.ballot
    }

    fn apply(env: &Env, record: &TransactionProposal) -> Result<(), WalletError> {
        let config = storage::read_config(env)?;
        external::invoke_destination(env, &config, record)
    }

    fn publish(env: &Env, transition: Symbol, index: u64, actor: Option<Address>) {
        TransactionEvent {
            transition,
            index,
            actor,
        }
        .publish(env);
    }
}

pub(crate) fn submit(
    env: &Env,
    proposer: &Address,
    destination: Address,
    value: i128,
    payload: Bytes,
    expires_at: u64,
) -> Result<u64, WalletError> {
    owners::require_owner(env, proposer)?;
    if value < 0 {
        return Err(WalletError::InvalidValue);
    }

    let proposal = TransactionProposal {
        ballot: engine::open_ballot(env, proposer, expires_at)?,
        destination,
        value,
        payload,
    };
    Ok(engine::append::<TransactionLedger>(env, &proposal))
}
