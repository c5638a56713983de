use bcrypt::{hash, verify};

use crate::utils::errors::AppError;

/// Hash a password with the given bcrypt work factor.
///
/// The cost comes from the resolved settings: the default work factor in
/// development and production, the minimum one in the testing profile.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(AppError::internal)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash).map_err(AppError::internal)
}
