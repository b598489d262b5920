
mod account_test;
mod address_test;
mod token_test;
mod user_test;
