use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

use crate::errors::WalletError;
use crate::types::{DataKey, Vote, WalletConfig};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Proposals and votes must outlive the longest expiry window.
pub(crate) const RECORD_BUMP_AMOUNT: u32 = 35 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn write_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn read_config(env: &Env) -> Result<WalletConfig, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(WalletError::NotInitialized)
}

pub(crate) fn read_count(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0u64)
}

pub(crate) fn write_count(env: &Env, key: &DataKey, count: u64) {
    env.storage().instance().set(key, &count);
}

pub(crate) fn read_record<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: core::fmt::Debug,
{
    env.storage().persistent().get(key)
}

/// Keeps a record alive for another bump window once it has been read.
pub(crate) fn touch_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub(crate) fn write_record<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, record: &V) {
    env.storage().persistent().set(key, record);
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub(crate) fn read_vote(env: &Env, key: &DataKey) -> Vote {
    env.storage().persistent().get(key).unwrap_or(Vote::None)
}

pub(crate) fn write_vote(env: &Env, key: &DataKey, vote: Vote) {
    write_record(env, key, &vote);
}
