//! sea-orm entity definitions for the accounts database.
//!
//! The tables here are the module's external contract: column types,
//! nullability, uniqueness, and foreign-key delete behavior. The matching
//! DDL lives in the sibling migration crate.

pub mod accounts;
pub mod addresses;
pub mod email_verifications;
pub mod locations;
pub mod password_resets;
pub mod users;
