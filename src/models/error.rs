use thiserror::Error;

/// Malformed input at the boundary: the caller broke the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeValidationError {
    #[error("Invalid Account Number")]
    InvalidAccountNumber(i64),
    #[error("Invalid ticket type: {0}")]
    InvalidTicketType(String),
    #[error("Invalid number of tickets: {0}")]
    InvalidQuantity(String),
}

/// Well formed request that breaks a purchase rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchaseError {
    #[error("Atleast one ticket should be purchased")]
    NoTickets,
    #[error("Exceeded maximum number of tickets per purchase")]
    TooManyTickets { requested: u64, max: u32 },
    #[error("At least one adult ticket is required")]
    AdultRequired,
}

/// Error of a purchase call.
///
/// `E` is the error type shared by the payment and seat reservation
/// services. Their failures are returned as is in `External`.
#[derive(Debug, Error)]
pub enum PurchaseError<E> {
    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),
    #[error(transparent)]
    InvalidPurchase(#[from] InvalidPurchaseError),
    #[error(transparent)]
    External(E),
}

impl<E> PurchaseError<E> {
    pub fn is_type_validation(&self) -> bool {
        matches!(self, PurchaseError::TypeValidation(_))
    }

    pub fn is_invalid_purchase(&self) -> bool {
        matches!(self, PurchaseError::InvalidPurchase(_))
    }

    pub fn into_external(self) -> Option<E> {
        match self {
            PurchaseError::External(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to parse purchase policy: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid purchase policy: {0}")]
    Invalid(String),
}
