use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

use crate::{
    clock,
    errors::{AccessError, BallotError},
    events, ledger, ranking, storage,
    types::{BallotConfig, Subject, Voter},
};

#[contract]
pub struct D21Contract;

#[contractimpl]
impl D21Contract {
    // ── Deployment ───────────────────────────────────────────────────────────

    /// Fixes the owner and opens a seven day voting window starting at the
    /// current ledger timestamp.
    pub fn __constructor(env: Env, owner: Address) {
        owner.require_auth();

        let created_at = env.ledger().timestamp();
        storage::set_config(
            &env,
            &BallotConfig {
                owner,
                created_at,
                deadline: clock::deadline_from(created_at),
            },
        );
    }

    // ── Registry ─────────────────────────────────────────────────────────────

    /// Register the caller as a subject. Allowed at any time, including after
    /// the deadline.
    pub fn add_subject(env: Env, caller: Address, name: String) -> Result<(), BallotError> {
        caller.require_auth();

        if storage::has_subject(&env, &caller) {
            return Err(BallotError::SubjectAlreadyExists);
        }

        storage::insert_subject(&env, &caller, &Subject { name: name.clone(), tally: 0 });
        storage::bump_instance(&env);

        events::subject_added(&env, &caller, &name);
        Ok(())
    }

    /// Grant `voter` a full vote budget. Owner only; any other caller aborts
    /// with `AccessError::NotOwner`.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), BallotError> {
        caller.require_auth();

        let config = storage::get_config(&env);
        if caller != config.owner {
            panic_with_error!(&env, AccessError::NotOwner);
        }

        if storage::has_voter(&env, &voter) {
            return Err(BallotError::VoterAlreadyRegistered);
        }

        storage::save_voter(&env, &voter, &ledger::new_voter(&env));
        storage::bump_instance(&env);

        events::voter_added(&env, &voter);
        Ok(())
    }

    /// Subject addresses in registration order.
    pub fn list_subjects(env: Env) -> Vec<Address> {
        storage::get_subject_order(&env)
    }

    /// Name and tally of `subject`, or an empty name and zero tally when no
    /// such subject exists.
    pub fn get_subject(env: Env, subject: Address) -> Subject {
        storage::get_subject(&env, &subject).unwrap_or_else(|| Subject {
            name: String::from_str(&env, ""),
            tally: 0,
        })
    }

    pub fn get_voter(env: Env, voter: Address) -> Option<Voter> {
        storage::get_voter(&env, &voter)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn vote_positive(env: Env, caller: Address, subject: Address) -> Result<(), BallotError> {
        caller.require_auth();

        let (mut voter, mut record) = Self::load_vote_context(&env, &caller, &subject)?;
        ledger::cast_positive(&mut voter, &subject, &mut record)?;

        storage::save_subject(&env, &subject, &record);
        storage::save_voter(&env, &caller, &voter);
        storage::bump_instance(&env);

        events::positive_vote(&env, &caller, &subject, record.tally);
        Ok(())
    }

    pub fn vote_negative(env: Env, caller: Address, subject: Address) -> Result<(), BallotError> {
        caller.require_auth();

        let (mut voter, mut record) = Self::load_vote_context(&env, &caller, &subject)?;
        ledger::cast_negative(&mut voter, &subject, &mut record)?;

        storage::save_subject(&env, &subject, &record);
        storage::save_voter(&env, &caller, &voter);
        storage::bump_instance(&env);

        events::negative_vote(&env, &caller, &subject, record.tally);
        Ok(())
    }

    // ── Results & Clock ──────────────────────────────────────────────────────

    /// All subjects ranked by tally, highest first; ties keep registration order.
    pub fn get_results(env: Env) -> Vec<Subject> {
        let order = storage::get_subject_order(&env);
        let mut subjects = Vec::new(&env);
        for address in order.iter() {
            if let Some(subject) = storage::get_subject(&env, &address) {
                subjects.push_back(subject);
            }
        }
        ranking::rank(&env, subjects)
    }

    /// Seconds until voting closes; zero once closed.
    pub fn remaining_time(env: Env) -> u64 {
        let config = storage::get_config(&env);
        clock::remaining(config.deadline, env.ledger().timestamp())
    }

    pub fn is_open(env: Env) -> bool {
        let config = storage::get_config(&env);
        clock::is_open(config.deadline, env.ledger().timestamp())
    }

    pub fn deadline(env: Env) -> u64 {
        storage::get_config(&env).deadline
    }

    pub fn owner(env: Env) -> Address {
        storage::get_config(&env).owner
    }

    // ── Internal Helpers ─────────────────────────────────────────────────────

    /// Checks shared by both vote kinds, in order: window, voter, subject.
    fn load_vote_context(
        env: &Env,
        caller: &Address,
        subject: &Address,
    ) -> Result<(Voter, Subject), BallotError> {
        let config = storage::get_config(env);
        clock::ensure_open(config.deadline, env.ledger().timestamp())?;

        let voter = storage::get_voter(env, caller).ok_or(BallotError::VoterNotRegistered)?;
        let record = storage::get_subject(env, subject).ok_or(BallotError::SubjectNotFound)?;

        Ok((voter, record))
    }
}
