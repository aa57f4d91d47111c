//! Per-voter vote budget and tally mutation.
//!
//! Callers have already checked the voting window, voter registration and
//! subject existence. Every rule is checked before anything is mutated, so an
//! `Err` leaves both records as they were.

use soroban_sdk::{Address, Env, Vec};

use crate::constants::MAX_POSITIVE_VOTES;
use crate::errors::BallotError;
use crate::types::{Subject, Voter};

/// A freshly registered voter with the full budget.
pub fn new_voter(env: &Env) -> Voter {
    Voter {
        positive_votes: 0,
        voted_subjects: Vec::new(env),
        negative_vote_cast: false,
    }
}

pub fn cast_positive(
    voter: &mut Voter,
    target: &Address,
    subject: &mut Subject,
) -> Result<(), BallotError> {
    // A spent negative vote never frees positive capacity.
    if voter.positive_votes >= MAX_POSITIVE_VOTES {
        return Err(BallotError::PositiveVoteLimitExceeded);
    }
    if voter.voted_subjects.contains(target) {
        return Err(BallotError::DuplicateVoteForSubject);
    }

    subject.tally += 1;
    voter.voted_subjects.push_back(target.clone());
    voter.positive_votes += 1;

    Ok(())
}

pub fn cast_negative(
    voter: &mut Voter,
    target: &Address,
    subject: &mut Subject,
) -> Result<(), BallotError> {
    if voter.positive_votes < MAX_POSITIVE_VOTES {
        return Err(BallotError::NegativeVoteRequiresTwoPositives);
    }
    if voter.negative_vote_cast {
        return Err(BallotError::NegativeVoteAlreadyUsed);
    }
    if voter.voted_subjects.contains(target) {
        return Err(BallotError::DuplicateVoteForSubject);
    }

    subject.tally -= 1;
    voter.negative_vote_cast = true;

    Ok(())
}
