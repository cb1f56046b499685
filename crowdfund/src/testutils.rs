#![cfg(test)]

use crate::contract::CrowdfundContract;
use sep_41_token::testutils::{MockTokenClient, MockTokenWASM};
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::{Address, Env, IntoVal};

/// Create a crowdfund contract with the round parameters set in the constructor
pub(crate) fn create_crowdfund(
    e: &Env,
    owner: &Address,
    token: &Address,
    duration: u64,
    goal: i128,
) -> Address {
    e.register(
        CrowdfundContract {},
        (owner.clone(), token.clone(), duration, goal),
    )
}

pub(crate) fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, MockTokenClient<'a>) {
    let contract_address = Address::generate(e);
    e.register_at(&contract_address, MockTokenWASM, ());
    let client = MockTokenClient::new(e, &contract_address);
    client.initialize(admin, &7, &"unit".into_val(e), &"test".into_val(e));
    (contract_address, client)
}

pub(crate) fn default_ledger_info() -> LedgerInfo {
    LedgerInfo {
        timestamp: 1441065600, // Sept 1st, 2015
        protocol_version: 22,
        sequence_number: 150,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 500000,
        min_persistent_entry_ttl: 500000,
        max_entry_ttl: 9999999,
    }
}

/// Advance the ledger timestamp by `time` seconds
pub(crate) fn jump(e: &Env, time: u64) {
    e.ledger().set(LedgerInfo {
        timestamp: e.ledger().timestamp().saturating_add(time),
        protocol_version: 22,
        sequence_number: e.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 999999,
        min_persistent_entry_ttl: 999999,
        max_entry_ttl: 9999999,
    });
}
