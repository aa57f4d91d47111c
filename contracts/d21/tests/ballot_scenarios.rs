mod utils;

use d21_ballot::{AccessError, BallotError, Subject, ONE_DAY_SECONDS, VOTING_PERIOD_SECONDS};
use soroban_sdk::{Address, InvokeError};

use utils::{TestEnvironment, DEPLOYED_AT};

struct Candidate {
    name: &'static str,
    expected: i64,
}

const CANDIDATES: [Candidate; 9] = [
    Candidate { name: "a", expected: 0 },
    Candidate { name: "b", expected: 5 },
    Candidate { name: "c", expected: -2 },
    Candidate { name: "d", expected: 2 },
    Candidate { name: "e", expected: 3 },
    Candidate { name: "f", expected: 1 },
    Candidate { name: "g", expected: 8 },
    Candidate { name: "h", expected: -3 },
    Candidate { name: "i", expected: -1 },
];

// (account, candidate)
const POSITIVE_VOTES: [(usize, usize); 22] = [
    (10, 0),
    (10, 1),
    (11, 8),
    (12, 7),
    (11, 6),
    (13, 5),
    (13, 1),
    (14, 1),
    (14, 6),
    (15, 1),
    (15, 6),
    (16, 1),
    (16, 6),
    (17, 6),
    (18, 4),
    (0, 3),
    (8, 6),
    (8, 3),
    (9, 6),
    (0, 4),
    (19, 4),
    (19, 6),
];

const NEGATIVE_VOTES: [(usize, usize); 9] = [
    (10, 7),
    (11, 7),
    (13, 7),
    (14, 7),
    (15, 0),
    (16, 8),
    (8, 8),
    (0, 2),
    (19, 2),
];

#[test]
fn test_full_election_ranking() {
    let mut t = TestEnvironment::new();

    // Account 0 is the owner; accounts 1..=9 stand as candidates.
    let mut accounts: Vec<Address> = vec![t.owner.clone()];
    for _ in 1..25 {
        accounts.push(t.create_user());
    }

    for (i, candidate) in CANDIDATES.iter().enumerate() {
        t.ballot.add_subject(&accounts[i + 1], &t.name(candidate.name));
    }

    for i in 0..15 {
        assert_eq!(
            t.ballot.try_add_voter(&accounts[i + 1], &accounts[i]),
            Err(Err(InvokeError::Contract(AccessError::NotOwner as u32)))
        );
    }
    for account in accounts.iter().skip(8) {
        t.ballot.add_voter(&t.owner, account);
    }
    t.ballot.add_voter(&t.owner, &t.owner);

    for (voter, candidate) in POSITIVE_VOTES {
        t.ballot.vote_positive(&accounts[voter], &accounts[candidate + 1]);
    }
    for (voter, candidate) in NEGATIVE_VOTES {
        t.ballot.vote_negative(&accounts[voter], &accounts[candidate + 1]);
    }

    let mut expected: Vec<&Candidate> = CANDIDATES.iter().collect();
    expected.sort_by(|a, b| b.expected.cmp(&a.expected));

    let assert_results = |t: &TestEnvironment| {
        let results = t.ballot.get_results();
        assert_eq!(results.len() as usize, expected.len());
        for (i, candidate) in expected.iter().enumerate() {
            assert_eq!(
                results.get(i as u32).unwrap(),
                Subject {
                    name: t.name(candidate.name),
                    tally: candidate.expected,
                }
            );
        }
    };
    assert_results(&t);

    t.advance_time(VOTING_PERIOD_SECONDS);
    assert_eq!(
        t.ballot.try_vote_positive(&accounts[9], &accounts[1]),
        Err(Ok(BallotError::VotingClosed))
    );

    // Closing the window leaves the tallies intact
    assert_results(&t);
}

#[test]
fn test_remaining_time_over_the_week() {
    let mut t = TestEnvironment::new();

    assert_eq!(t.ballot.remaining_time(), VOTING_PERIOD_SECONDS);
    assert_eq!(t.ballot.deadline(), DEPLOYED_AT + VOTING_PERIOD_SECONDS);

    let mut previous = t.ballot.remaining_time();
    for _ in 0..8 {
        t.advance_time(ONE_DAY_SECONDS);
        let remaining = t.ballot.remaining_time();
        assert!(remaining <= previous);
        previous = remaining;
    }
    assert_eq!(previous, 0);
    assert!(!t.ballot.is_open());
}

#[test]
fn test_window_closes_permanently() {
    let mut t = TestEnvironment::new();

    let a = t.create_user();
    let b = t.create_user();
    let voter = t.create_user();
    t.ballot.add_subject(&a, &t.name("a"));
    t.ballot.add_subject(&b, &t.name("b"));
    t.ballot.add_voter(&t.owner, &voter);

    t.advance_time(VOTING_PERIOD_SECONDS - 1);
    t.ballot.vote_positive(&voter, &a);

    t.advance_time(1);
    assert_eq!(t.ballot.remaining_time(), 0);
    for _ in 0..3 {
        assert_eq!(
            t.ballot.try_vote_positive(&voter, &b),
            Err(Ok(BallotError::VotingClosed))
        );
        t.advance_time(ONE_DAY_SECONDS);
    }

    // Registration still works once closed
    let late = t.create_user();
    t.ballot.add_subject(&late, &t.name("late"));
    assert_eq!(t.ballot.get_subject(&late).tally, 0);
    assert_eq!(t.ballot.get_subject(&a).tally, 1);
}

#[test]
fn test_no_voter_exceeds_budget() {
    let t = TestEnvironment::new();

    let subjects: Vec<Address> = (0..5).map(|_| t.create_user()).collect();
    for (i, s) in subjects.iter().enumerate() {
        t.ballot.add_subject(s, &t.name(["a", "b", "c", "d", "e"][i]));
    }
    let voter = t.create_user();
    t.ballot.add_voter(&t.owner, &voter);

    // Hammer every subject with both vote kinds; at most three succeed.
    let mut accepted = 0;
    for _ in 0..2 {
        for s in subjects.iter() {
            if t.ballot.try_vote_positive(&voter, s).is_ok() {
                accepted += 1;
            }
            if t.ballot.try_vote_negative(&voter, s).is_ok() {
                accepted += 1;
            }
        }
    }
    assert_eq!(accepted, 3);

    let record = t.ballot.get_voter(&voter).unwrap();
    assert_eq!(record.positive_votes, 2);
    assert!(record.negative_vote_cast);

    let total: i64 = subjects.iter().map(|s| t.ballot.get_subject(s).tally).sum();
    assert_eq!(total, 1);
}
