use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FrozenTokenError {
    AccountFrozen = 1,
    InsufficientBalance = 2,
}

/// Token that rejects any transfer leaving the frozen account.
///
/// Freezing the crowdfund address lets deposits through while trapping every
/// payout, which exercises the crowdfund's handling of a rejected transfer.
#[contract]
pub struct FrozenToken;

#[contractimpl]
impl FrozenToken {
    pub fn __constructor(e: Env, frozen: Address) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, "frozen"), &frozen);
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        let balance = Self::balance(e.clone(), to.clone());
        e.storage().persistent().set(&to, &(balance + amount));
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let frozen: Address = e
            .storage()
            .instance()
            .get(&Symbol::new(&e, "frozen"))
            .unwrap();
        if from == frozen {
            panic_with_error!(&e, FrozenTokenError::AccountFrozen);
        }
        let from_balance = Self::balance(e.clone(), from.clone());
        if from_balance < amount {
            panic_with_error!(&e, FrozenTokenError::InsufficientBalance);
        }
        e.storage().persistent().set(&from, &(from_balance - amount));
        let to_balance = Self::balance(e.clone(), to.clone());
        e.storage().persistent().set(&to, &(to_balance + amount));
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        e.storage().persistent().get(&id).unwrap_or(0)
    }
}
