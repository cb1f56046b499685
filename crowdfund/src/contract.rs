use crate::{funding, storage};
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};

/// ### Crowdfund
///
/// A single-round crowdfunding escrow. Contributions of one token are held
/// until the round's end time; the owner drains the balance if the goal was
/// met, otherwise each contributor reclaims their own deposit.
#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Construct the funding round.
    ///
    /// The round parameters are fixed for the lifetime of the contract.
    /// No bounds are placed on `duration` or `goal`: a zero duration creates
    /// a round that is concluded immediately, and a zero goal is trivially
    /// met.
    ///
    /// ### Arguments
    /// * `owner` - The account allowed to withdraw a successful round
    /// * `token` - The token contract the round collects
    /// * `duration` - Seconds from now until the round concludes
    /// * `goal` - The minimum total raised that unlocks `withdraw`
    pub fn __constructor(e: Env, owner: Address, token: Address, duration: u64, goal: i128) {
        storage::extend_instance(&e);
        storage::set_owner(&e, &owner);
        storage::set_token(&e, &token);
        storage::set_end(&e, &(e.ledger().timestamp() + duration));
        storage::set_goal(&e, &goal);
        storage::set_total_raised(&e, &0);
    }
}

#[contractclient(name = "CrowdfundClient")]
pub trait Crowdfund {
    /// Contribute `amount` of the round's token from `from`
    ///
    /// ### Arguments
    /// * `from` - The address making the contribution
    /// * `amount` - The amount of tokens to contribute
    ///
    /// ### Panics
    /// If the round has concluded or the amount is not positive
    fn contribute(e: Env, from: Address, amount: i128);

    /// (Owner only) Withdraw the full collected balance of a successful
    /// round to `from`
    ///
    /// Returns the amount of tokens withdrawn
    ///
    /// ### Arguments
    /// * `from` - The address receiving the balance, must be the owner
    ///
    /// ### Panics
    /// If the caller is not the owner, or the round has not concluded with
    /// its goal met
    fn withdraw(e: Env, from: Address) -> i128;

    /// Reclaim `from`'s recorded contribution from a failed round
    ///
    /// Returns the amount of tokens refunded
    ///
    /// ### Arguments
    /// * `from` - The address reclaiming its contribution
    ///
    /// ### Panics
    /// If the round has not concluded, the goal was met, or `from` has no
    /// recorded contribution
    fn refund(e: Env, from: Address) -> i128;

    /// Fetch the owner of the round
    fn owner(e: Env) -> Address;

    /// Fetch the token the round collects
    fn token(e: Env) -> Address;

    /// Fetch the ledger timestamp at which the round concludes
    fn end(e: Env) -> u64;

    /// Fetch the funding goal of the round
    fn goal(e: Env) -> i128;

    /// Fetch the sum of outstanding contributions
    fn total_raised(e: Env) -> i128;

    /// Fetch the recorded contribution for an address, or 0 if none exists
    ///
    /// ### Arguments
    /// * `contributor` - The address to fetch the contribution for
    fn contributions(e: Env, contributor: Address) -> i128;
}

#[contractimpl]
impl Crowdfund for CrowdfundContract {
    fn contribute(e: Env, from: Address, amount: i128) {
        storage::extend_instance(&e);
        from.require_auth();

        funding::execute_contribute(&e, &from, amount);
    }

    fn withdraw(e: Env, from: Address) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();

        funding::execute_withdraw(&e, &from)
    }

    fn refund(e: Env, from: Address) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();

        funding::execute_refund(&e, &from)
    }

    fn owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn token(e: Env) -> Address {
        storage::get_token(&e)
    }

    fn end(e: Env) -> u64 {
        storage::get_end(&e)
    }

    fn goal(e: Env) -> i128 {
        storage::get_goal(&e)
    }

    fn total_raised(e: Env) -> i128 {
        storage::get_total_raised(&e)
    }

    fn contributions(e: Env, contributor: Address) -> i128 {
        storage::get_contribution(&e, &contributor)
    }
}
