use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Owners,
    TransactionCount,
    Transaction(u64),
    TransactionVote(u64, Address),
    OwnerProposalCount,
    OwnerProposal(u64),
    OwnerProposalVote(u64, Address),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Executed,
    Canceled,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Vote {
    None,
    Confirm,
    Reject,
}

/// Voting state shared by every proposal kind.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ballot {
    pub proposer: Address,
    pub status: ProposalStatus,
    pub confirmations: u32,
    pub rejections: u32,
    pub created_at: u64,
    pub expires_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionProposal {
    pub ballot: Ballot,
    pub destination: Address,
    pub value: i128,
    pub payload: Bytes,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OwnerChangeKind {
    Add,
    Remove,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerProposal {
    pub ballot: Ballot,
    pub target: Address,
    pub kind: OwnerChangeKind,
}

/// What happens when the registry refuses an owner list update.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NotifyPolicy {
    /// The ownership change is rolled back together with the failed call.
    Fatal,
    /// The ownership change is kept and the failure is reported as an event.
    Advisory,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletConfig {
    pub registry: Address,
    pub native_asset: Address,
    pub notify_policy: NotifyPolicy,
}
