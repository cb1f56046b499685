use soroban_sdk::{Address, Env, Symbol};

pub struct CrowdfundEvents {}

impl CrowdfundEvents {
    /// Emitted when an account contributes to the round
    ///
    /// - topics - `["contribute", contributor: Address]`
    /// - data - `amount: i128`
    ///
    /// ### Arguments
    /// * contributor - The account the contribution is credited to
    /// * amount - The amount of the token contributed
    pub fn contribute(e: &Env, contributor: Address, amount: i128) {
        let topics = (Symbol::new(e, "contribute"), contributor);
        e.events().publish(topics, amount);
    }

    /// Emitted when the owner withdraws a successful round
    ///
    /// - topics - `["withdraw", owner: Address]`
    /// - data - `amount: i128`
    ///
    /// ### Arguments
    /// * owner - The owner of the round
    /// * amount - The amount of the token withdrawn
    pub fn withdraw(e: &Env, owner: Address, amount: i128) {
        let topics = (Symbol::new(e, "withdraw"), owner);
        e.events().publish(topics, amount);
    }

    /// Emitted when a contributor reclaims their deposit from a failed round
    ///
    /// - topics - `["refund", contributor: Address]`
    /// - data - `amount: i128`
    ///
    /// ### Arguments
    /// * contributor - The account reclaiming its contribution
    /// * amount - The amount of the token refunded
    pub fn refund(e: &Env, contributor: Address, amount: i128) {
        let topics = (Symbol::new(e, "refund"), contributor);
        e.events().publish(topics, amount);
    }
}
