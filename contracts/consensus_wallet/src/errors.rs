use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    Unauthorized = 10,

    TransactionNotFound = 20,
    OwnerProposalNotFound = 21,

    AlreadyFinalized = 30,
    AlreadyVoted = 31,
    ProposalExpired = 32,
    NotExpired = 33,
    InsufficientConfirmations = 34,

    DuplicateOwner = 40,
    OwnerNotFound = 41,
    AlreadyOwner = 42,
    NotAnOwner = 43,
    InvalidExpiry = 44,
    InvalidValue = 45,
    InvalidTarget = 46,

    CannotRemoveLastOwner = 50,
    TooFewOwners = 51,

    ExecutionFailed = 60,
    RegistryNotifyFailed = 61,
}

/// Coarse classification of [`WalletError`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    NotFound,
    State,
    Validation,
    Invariant,
    ExternalCall,
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            10..=19 => ErrorKind::Authorization,
            20..=29 => ErrorKind::NotFound,
            40..=49 => ErrorKind::Validation,
            50..=59 => ErrorKind::Invariant,
            60..=69 => ErrorKind::ExternalCall,
            _ => ErrorKind::State,
        }
    }
}
