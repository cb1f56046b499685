use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the crowdfund contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Crowdfund specific errors start at 100.
pub enum CrowdfundError {
    // Common Errors
    InternalError = 1,

    NegativeAmountError = 8,

    // Crowdfund Errors (start at 100)
    FundingClosed = 100,
    ZeroContribution = 101,
    NotOwner = 102,
    FundingNotConcluded = 103,
    GoalReached = 104,
    NoContribution = 105,
    TransferFailed = 106,
}
