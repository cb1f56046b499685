use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::{errors::CrowdfundError, events::CrowdfundEvents, storage};

/// Refund the recorded contribution of `from` after a failed round.
///
/// The contribution entry is zeroed and the total decremented before the
/// token leaves the contract, so a re-entrant call observes the updated
/// accounting and cannot claim the same funds twice. A rejected transfer
/// traps the invocation and the host rolls the accounting back with it.
///
/// Returns the amount of the token refunded.
///
/// ### Arguments
/// * from - The contributor reclaiming their deposit
///
/// ### Panics
/// If the round has not concluded, if the goal was met, if `from` has no
/// recorded contribution, or if the recipient rejects the transfer
pub fn execute_refund(e: &Env, from: &Address) -> i128 {
    if e.ledger().timestamp() < storage::get_end(e) {
        panic_with_error!(e, CrowdfundError::FundingNotConcluded);
    }
    if storage::get_total_raised(e) >= storage::get_goal(e) {
        panic_with_error!(e, CrowdfundError::GoalReached);
    }
    let balance = storage::get_contribution(e, from);
    if balance == 0 {
        panic_with_error!(e, CrowdfundError::NoContribution);
    }

    // zero the entry and shrink the total before any value leaves the contract
    storage::set_contribution(e, from, &0);
    storage::set_total_raised(e, &(storage::get_total_raised(e) - balance));

    let token_client = TokenClient::new(e, &storage::get_token(e));
    if token_client
        .try_transfer(&e.current_contract_address(), from, &balance)
        .is_err()
    {
        panic_with_error!(e, CrowdfundError::TransferFailed);
    }

    CrowdfundEvents::refund(e, from.clone(), balance);
    balance
}
