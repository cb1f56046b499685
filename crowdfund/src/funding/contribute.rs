use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    errors::CrowdfundError, events::CrowdfundEvents, storage, validator::require_nonnegative,
};

/// Contribute `amount` of the round's token from `from` to the round.
///
/// The amount is pulled from `from` before the accounting is updated, so the
/// contract balance always covers the recorded total.
///
/// ### Arguments
/// * from - The account the contribution is credited to
/// * amount - The amount of the token to contribute
///
/// ### Panics
/// If the amount is not positive or the round has concluded
pub fn execute_contribute(e: &Env, from: &Address, amount: i128) {
    // a concluded round rejects everything, whatever the amount
    if e.ledger().timestamp() >= storage::get_end(e) {
        panic_with_error!(e, CrowdfundError::FundingClosed);
    }
    require_nonnegative(e, &amount);
    if amount == 0 {
        panic_with_error!(e, CrowdfundError::ZeroContribution);
    }

    let token_client = TokenClient::new(e, &storage::get_token(e));
    token_client.transfer(from, &e.current_contract_address(), &amount);

    let balance = storage::get_contribution(e, from);
    storage::set_contribution(e, from, &(balance + amount));
    storage::set_total_raised(e, &(storage::get_total_raised(e) + amount));

    CrowdfundEvents::contribute(e, from.clone(), amount);
}
