use soroban_sdk::{contracttype, Address, String, Vec};

/// Fixed at deployment, never rewritten
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotConfig {
    pub owner: Address,
    /// Ledger timestamp of deployment
    pub created_at: u64,
    /// First timestamp at which voting is closed
    pub deadline: u64,
}

/// A candidate, keyed by its own address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subject {
    pub name: String,
    pub tally: i64,
}

/// Vote budget of a registered voter
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub positive_votes: u32,
    /// Subjects that received this voter's positive votes
    pub voted_subjects: Vec<Address>,
    pub negative_vote_cast: bool,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    // Insertion order of subject addresses
    SubjectOrder,
    Subject(Address),
    Voter(Address),
}
