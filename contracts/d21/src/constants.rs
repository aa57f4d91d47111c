//! Ballot configuration constants

// ===== Time Constants (in seconds) =====

/// One day in seconds (86400)
pub const ONE_DAY_SECONDS: u64 = 86_400;

/// Length of the voting window measured from deployment (7 days)
pub const VOTING_PERIOD_SECONDS: u64 = 7 * ONE_DAY_SECONDS;

// ===== Vote Budget =====

/// Positive votes available to each voter
pub const MAX_POSITIVE_VOTES: u32 = 2;

// ===== Ledger TTL =====
// Results must stay readable long after the deadline.
// At ~5s per ledger: 30 days ≈ 518,400 ledgers.

pub const BALLOT_TTL_LEDGERS: u32 = 518_400;

/// Entries are bumped back to `BALLOT_TTL_LEDGERS` once they fall below this
pub const BALLOT_TTL_THRESHOLD: u32 = BALLOT_TTL_LEDGERS - 17_280;
