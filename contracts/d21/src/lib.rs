#![no_std]
//! D21 (Janeček method) ballot contract.
//!
//! Registered voters cast up to two positive votes and, once both are used,
//! a single negative vote across the registered subjects. Voting is open for
//! seven days from deployment; results are ranked by tally.

mod clock;
mod constants;
mod contract;
mod errors;
mod events;
mod ledger;
mod ranking;
mod storage;
mod types;

pub use constants::{MAX_POSITIVE_VOTES, ONE_DAY_SECONDS, VOTING_PERIOD_SECONDS};
pub use contract::{D21Contract, D21ContractClient};
pub use errors::{AccessError, BallotError};
pub use types::{BallotConfig, Subject, Voter};
