use crate::token::create_token;
use crowdfund::{CrowdfundClient, CrowdfundContract};
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, EnvTestConfig, Ledger, LedgerInfo};
use soroban_sdk::{Address, Env};

pub const SCALAR_7: i128 = 1_000_0000;

/// One week, the default round duration used across the suites
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

pub struct TestFixture<'a> {
    pub env: Env,
    pub bombadil: Address,
    pub users: Vec<Address>,
    pub token: MockTokenClient<'a>,
    pub crowdfund: CrowdfundClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for the crowdfund contract
    ///
    /// Deploys a 7 decimal FUND test token and a crowdfund round owned by
    /// `bombadil` collecting it, then funds 3 users with 1000 FUND each.
    pub fn create<'a>(duration: u64, goal: i128) -> TestFixture<'a> {
        let e = Env::new_with_config(EnvTestConfig {
            capture_snapshot_at_drop: false,
        });
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let bombadil = Address::generate(&e);

        e.ledger().set(LedgerInfo {
            timestamp: 1441065600, // Sept 1st, 2015
            protocol_version: 22,
            sequence_number: 150,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 500000,
            min_persistent_entry_ttl: 500000,
            max_entry_ttl: 9999999,
        });

        let (token_id, token_client) = create_token(&e, &bombadil, 7, "FUND");

        let crowdfund_id = e.register(
            CrowdfundContract {},
            (bombadil.clone(), token_id, duration, goal),
        );
        let crowdfund_client = CrowdfundClient::new(&e, &crowdfund_id);

        let mut users = Vec::new();
        for _ in 0..3 {
            let user = Address::generate(&e);
            token_client.mint(&user, &(1000 * SCALAR_7));
            users.push(user);
        }

        TestFixture {
            env: e,
            bombadil,
            users,
            token: token_client,
            crowdfund: crowdfund_client,
        }
    }

    pub fn jump(&self, time: u64) {
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: 22,
            sequence_number: self.env.ledger().sequence(),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 999999,
            min_persistent_entry_ttl: 999999,
            max_entry_ttl: 9999999,
        });
    }
}
