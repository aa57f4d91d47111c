//! Deadline arithmetic. Callers pass the ledger timestamp in explicitly.

use crate::constants::VOTING_PERIOD_SECONDS;
use crate::errors::BallotError;

pub fn deadline_from(created_at: u64) -> u64 {
    created_at.saturating_add(VOTING_PERIOD_SECONDS)
}

/// Seconds left until `deadline`; zero once it has passed.
pub fn remaining(deadline: u64, now: u64) -> u64 {
    deadline.saturating_sub(now)
}

pub fn is_open(deadline: u64, now: u64) -> bool {
    now < deadline
}

pub fn ensure_open(deadline: u64, now: u64) -> Result<(), BallotError> {
    if !is_open(deadline, now) {
        return Err(BallotError::VotingClosed);
    }
    Ok(())
}
