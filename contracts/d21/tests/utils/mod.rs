use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use d21_ballot::{D21Contract, D21ContractClient};

pub const DEPLOYED_AT: u64 = 1_640_995_200;

pub struct TestEnvironment {
    pub env: Env,
    pub owner: Address,
    pub ballot: D21ContractClient<'static>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        // Setup consistent ledger state
        env.ledger().set_timestamp(DEPLOYED_AT);
        env.ledger().set_sequence_number(1);

        let owner = Address::generate(&env);
        let ballot_id = env.register(D21Contract, (owner.clone(),));
        let ballot = D21ContractClient::new(&env, &ballot_id);

        Self {
            env,
            owner,
            ballot,
        }
    }

    pub fn advance_time(&mut self, seconds: u64) -> &mut Self {
        let current = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current + seconds);
        self
    }

    pub fn create_user(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn name(&self, s: &str) -> String {
        String::from_str(&self.env, s)
    }
}
