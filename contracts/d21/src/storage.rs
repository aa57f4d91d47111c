use soroban_sdk::{Address, Env, Vec};

use crate::constants::{BALLOT_TTL_LEDGERS, BALLOT_TTL_THRESHOLD};
use crate::types::{BallotConfig, DataKey, Subject, Voter};

// ── Config ───────────────────────────────────────────────────────────────────

pub fn set_config(env: &Env, config: &BallotConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_config(env: &Env) -> BallotConfig {
    // Written by the constructor before any other entry point can run.
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap()
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BALLOT_TTL_THRESHOLD, BALLOT_TTL_LEDGERS);
}

// ── Subjects ─────────────────────────────────────────────────────────────────

pub fn get_subject_order(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::SubjectOrder)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn has_subject(env: &Env, subject: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Subject(subject.clone()))
}

pub fn get_subject(env: &Env, subject: &Address) -> Option<Subject> {
    env.storage()
        .persistent()
        .get(&DataKey::Subject(subject.clone()))
}

pub fn save_subject(env: &Env, address: &Address, subject: &Subject) {
    let key = DataKey::Subject(address.clone());
    env.storage().persistent().set(&key, subject);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALLOT_TTL_THRESHOLD, BALLOT_TTL_LEDGERS);
}

/// Stores a new subject and appends it to the enumeration order.
pub fn insert_subject(env: &Env, address: &Address, subject: &Subject) {
    save_subject(env, address, subject);

    let mut order = get_subject_order(env);
    order.push_back(address.clone());
    env.storage().persistent().set(&DataKey::SubjectOrder, &order);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::SubjectOrder, BALLOT_TTL_THRESHOLD, BALLOT_TTL_LEDGERS);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn has_voter(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(voter.clone()))
}

pub fn get_voter(env: &Env, voter: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALLOT_TTL_THRESHOLD, BALLOT_TTL_LEDGERS);
}
