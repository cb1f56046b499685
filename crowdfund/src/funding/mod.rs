mod contribute;
pub use contribute::execute_contribute;

mod withdraw;
pub use withdraw::execute_withdraw;

mod refund;
pub use refund::execute_refund;
