pub mod frozen_token;
pub mod test_fixture;
pub mod token;
