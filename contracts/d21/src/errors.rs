use soroban_sdk::contracterror;

/// Domain-rule failures of the ballot.
///
/// Codes are stable; clients branch on them to learn which rule rejected a call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BallotError {
    /// A subject is already registered under this address
    SubjectAlreadyExists = 1,

    /// A voter is already registered under this address
    VoterAlreadyRegistered = 2,

    /// Both positive votes have been used
    PositiveVoteLimitExceeded = 3,

    /// The deadline has passed
    VotingClosed = 4,

    /// Caller was never registered by the owner
    VoterNotRegistered = 5,

    /// No subject is registered under the target address
    SubjectNotFound = 6,

    /// Caller already voted positively for the target subject
    DuplicateVoteForSubject = 7,

    /// The single negative vote has been used
    NegativeVoteAlreadyUsed = 8,

    /// A negative vote needs both positive votes to be cast first
    NegativeVoteRequiresTwoPositives = 9,
}

/// Authorization failures. Raised by aborting the invocation, never returned
/// alongside `BallotError`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessError {
    NotOwner = 100,
}
