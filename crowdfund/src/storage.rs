use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Key Types **********/

const OWNER_KEY: &str = "Owner";
const TOKEN_KEY: &str = "Token";
const END_KEY: &str = "End";
const GOAL_KEY: &str = "Goal";
const RAISED_KEY: &str = "Raised";

#[derive(Clone)]
#[contracttype]
pub enum CrowdfundDataKey {
    Contribution(Address),
}

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    default: V,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default
    }
}

/********** Instance Storage **********/

/// Fetch the owner of the round
pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

/// Set the owner of the round
///
/// ### Arguments
/// * `owner` - The account allowed to withdraw a successful round
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Fetch the token the round collects
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

/// Set the token the round collects
///
/// ### Arguments
/// * `token` - The ID of the token contract
pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/// Fetch the ledger timestamp at which the round concludes
pub fn get_end(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get::<Symbol, u64>(&Symbol::new(e, END_KEY))
        .unwrap_optimized()
}

/// Set the ledger timestamp at which the round concludes
///
/// ### Arguments
/// * `end` - The conclusion timestamp, in seconds since epoch
pub fn set_end(e: &Env, end: &u64) {
    e.storage()
        .instance()
        .set::<Symbol, u64>(&Symbol::new(e, END_KEY), end);
}

/// Fetch the funding goal of the round
pub fn get_goal(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, GOAL_KEY))
        .unwrap_optimized()
}

/// Set the funding goal of the round
///
/// ### Arguments
/// * `goal` - The minimum total that unlocks `withdraw`
pub fn set_goal(e: &Env, goal: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, GOAL_KEY), goal);
}

/// Fetch the sum of outstanding contributions
pub fn get_total_raised(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, RAISED_KEY))
        .unwrap_optimized()
}

/// Set the sum of outstanding contributions
///
/// ### Arguments
/// * `raised` - The new total
pub fn set_total_raised(e: &Env, raised: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, RAISED_KEY), raised);
}

/********** Persistent Storage **********/

/// Fetch the recorded contribution of `contributor`, or 0 if they have none
///
/// ### Arguments
/// * `contributor` - The account to look up
pub fn get_contribution(e: &Env, contributor: &Address) -> i128 {
    let key = CrowdfundDataKey::Contribution(contributor.clone());
    get_persistent_default::<CrowdfundDataKey, i128>(
        e,
        &key,
        0,
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    )
}

/// Set the recorded contribution of `contributor`
///
/// ### Arguments
/// * `contributor` - The account to set the contribution for
/// * `balance` - The cumulative contributed amount
pub fn set_contribution(e: &Env, contributor: &Address, balance: &i128) {
    let key = CrowdfundDataKey::Contribution(contributor.clone());
    e.storage()
        .persistent()
        .set::<CrowdfundDataKey, i128>(&key, balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
