#![no_std]

mod engine;
mod errors;
mod events;
mod external;
mod owner_changes;
mod owners;
mod storage;
mod transactions;
mod types;
mod wallet;

pub use engine::MAX_EXPIRY_WINDOW;
pub use errors::{ErrorKind, WalletError};
pub use events::{OwnerProposalEvent, RegistrySyncFailed, TransactionEvent};
pub use external::{
    ExecutionSink, ExecutionSinkClient, RegistryClient, WalletRegistryInterface,
};
pub use owners::{majority_of, OwnerSet, MIN_OWNERS};
pub use types::{
    Ballot, NotifyPolicy, OwnerChangeKind, OwnerProposal, ProposalStatus, TransactionProposal,
    Vote, WalletConfig,
};
pub use wallet::{ConsensusWallet, ConsensusWalletClient};
