use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubjectAdded {
    #[topic]
    pub subject: Address,
    pub name: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterAdded {
    #[topic]
    pub voter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositiveVote {
    #[topic]
    pub voter: Address,
    #[topic]
    pub subject: Address,
    /// Subject tally after the vote
    pub tally: i64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NegativeVote {
    #[topic]
    pub voter: Address,
    #[topic]
    pub subject: Address,
    /// Subject tally after the vote
    pub tally: i64,
}

pub fn subject_added(env: &Env, subject: &Address, name: &String) {
    SubjectAdded {
        subject: subject.clone(),
        name: name.clone(),
    }
    .publish(env);
}

pub fn voter_added(env: &Env, voter: &Address) {
    VoterAdded {
        voter: voter.clone(),
    }
    .publish(env);
}

pub fn positive_vote(env: &Env, voter: &Address, subject: &Address, tally: i64) {
    PositiveVote {
        voter: voter.clone(),
        subject: subject.clone(),
        tally,
    }
    .publish(env);
}

pub fn negative_vote(env: &Env, voter: &Address, subject: &Address, tally: i64) {
    NegativeVote {
        voter: voter.clone(),
        subject: subject.clone(),
        tally,
    }
    .publish(env);
}
