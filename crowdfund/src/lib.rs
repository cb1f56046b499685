#![no_std]

mod contract;
mod errors;
mod events;
mod funding;
mod storage;
mod testutils;
mod validator;

pub use contract::{Crowdfund, CrowdfundClient, CrowdfundContract};
pub use errors::CrowdfundError;
pub use events::CrowdfundEvents;
pub use storage::CrowdfundDataKey;
