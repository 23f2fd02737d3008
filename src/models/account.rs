use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TypeValidationError;

/// Identifier of the party that pays for and holds the seats of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = TypeValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(TypeValidationError::InvalidAccountNumber(value));
        }
        Ok(AccountId(value as u64))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
