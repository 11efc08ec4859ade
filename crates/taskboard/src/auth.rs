use bcrypt::{hash, verify};

use crate::errors::AppError;

/// Cost factor used for stored passwords.
///
/// Matches what the application's login verifier expects, so hashes
/// written by tooling are interchangeable with ones created at signup.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Hashes `password` with bcrypt at the given cost. Every call draws a
/// fresh random salt, so two hashes of the same password never match.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    Ok(hash(password, cost)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    Ok(verify(password, hash)?)
}
