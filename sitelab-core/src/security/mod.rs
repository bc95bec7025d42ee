//! Credential handling for user records.
//!
//! User passwords are stored as Argon2id PHC strings, never as plain text.

pub mod password;

pub use password::{hash_password, verify_password, PasswordError, PasswordHasherService};
