use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::{errors::CrowdfundError, events::CrowdfundEvents, storage};

/// Withdraw the contract's full token balance to `from` after a successful
/// round.
///
/// The recorded contributions and total are left untouched as the historical
/// record of the round, so a repeat call moves a balance of zero.
///
/// Returns the amount of the token moved.
///
/// ### Arguments
/// * from - The account the balance is sent to, must be the owner
///
/// ### Panics
/// If `from` is not the owner, if the round has not concluded with its goal
/// met, or if the recipient rejects the transfer
pub fn execute_withdraw(e: &Env, from: &Address) -> i128 {
    if from != &storage::get_owner(e) {
        panic_with_error!(e, CrowdfundError::NotOwner);
    }
    if e.ledger().timestamp() < storage::get_end(e)
        || storage::get_total_raised(e) < storage::get_goal(e)
    {
        panic_with_error!(e, CrowdfundError::FundingNotConcluded);
    }

    let token_client = TokenClient::new(e, &storage::get_token(e));
    let balance = token_client.balance(&e.current_contract_address());
    if token_client
        .try_transfer(&e.current_contract_address(), from, &balance)
        .is_err()
    {
        panic_with_error!(e, CrowdfundError::TransferFailed);
    }

    CrowdfundEvents::withdraw(e, from.clone(), balance);
    balance
}
