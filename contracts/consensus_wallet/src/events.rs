use soroban_sdk::{contractevent, symbol_short, Address, Symbol, Vec};

pub const SUBMITTED: Symbol = symbol_short!("submitted");
pub const CONFIRMED: Symbol = symbol_short!("confirmed");
pub const REJECTED: Symbol = symbol_short!("rejected");
pub const EXECUTED: Symbol = symbol_short!("executed");
pub const CANCELED: Symbol = symbol_short!("canceled");
pub const EXPIRED: Symbol = symbol_short!("expired");

/// Lifecycle transition of a transaction proposal.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionEvent {
    #[topic]
    pub transition: Symbol,
    #[topic]
    pub index: u64,
    pub actor: Option<Address>,
}

/// Lifecycle transition of an ownership-change proposal.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerProposalEvent {
    #[topic]
    pub transition: Symbol,
    #[topic]
    pub index: u64,
    pub actor: Option<Address>,
}

/// Emitted under `NotifyPolicy::Advisory` when the registry rejects an update.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrySyncFailed {
    #[topic]
    pub registry: Address,
    pub owners: Vec<Address>,
}
