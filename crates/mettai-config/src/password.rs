use serde::Serialize;

use crate::profile::Profile;

/// Default bcrypt work factor.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Minimum bcrypt work factor, used by the testing profile so hashing does
/// not dominate test runtime.
pub const FAST_BCRYPT_COST: u32 = 4;

/// Password hashing settings.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub(crate) fn for_profile(profile: Profile) -> Self {
        let bcrypt_cost = match profile {
            Profile::Testing => FAST_BCRYPT_COST,
            Profile::Development | Profile::Production => DEFAULT_BCRYPT_COST,
        };
        Self { bcrypt_cost }
    }
}
