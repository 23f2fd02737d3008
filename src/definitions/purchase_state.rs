use std::fmt;

use uuid::Uuid;

use crate::models::error::{InvalidPurchaseError, TypeValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Payment,
    SeatReservation,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Collaborator::Payment => write!(f, "payment"),
            Collaborator::SeatReservation => write!(f, "seat reservation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TypeValidation(TypeValidationError),
    InvalidPurchase(InvalidPurchaseError),
}

impl From<TypeValidationError> for RejectReason {
    fn from(value: TypeValidationError) -> Self {
        RejectReason::TypeValidation(value)
    }
}

impl From<InvalidPurchaseError> for RejectReason {
    fn from(value: InvalidPurchaseError) -> Self {
        RejectReason::InvalidPurchase(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseState {
    Start,
    AccountValidated,
    QuantityValidated,
    AdultPresenceValidated,
    PaymentIssued,
    SeatsReserved,
    Done,
    Rejected(RejectReason),
    Failed {
        collaborator: Collaborator,
        error: String,
    },
}

impl PurchaseState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PurchaseState::Done | PurchaseState::Rejected(_) | PurchaseState::Failed { .. }
        )
    }

    /// Whether the flow may move from `self` to `next`.
    ///
    /// Validation states may only be left towards the following state or
    /// `Rejected`, the external calls towards the following state or
    /// `Failed`. There is no edge back to an earlier state.
    pub fn can_transition_to(&self, next: &PurchaseState) -> bool {
        use PurchaseState::*;
        match (self, next) {
            (Start, AccountValidated)
            | (AccountValidated, QuantityValidated)
            | (QuantityValidated, AdultPresenceValidated)
            | (AdultPresenceValidated, PaymentIssued)
            | (PaymentIssued, SeatsReserved)
            | (SeatsReserved, Done) => true,
            (Start | AccountValidated | QuantityValidated, Rejected(_)) => true,
            (AdultPresenceValidated, Failed { collaborator, .. }) => {
                *collaborator == Collaborator::Payment
            }
            (PaymentIssued, Failed { collaborator, .. }) => {
                *collaborator == Collaborator::SeatReservation
            }
            _ => false,
        }
    }
}

static START: PurchaseState = PurchaseState::Start;

/// Progress of a single purchase call.
#[derive(Debug)]
pub struct PurchaseFlow {
    id: Uuid,
    history: Vec<PurchaseState>,
}

impl PurchaseFlow {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: vec![PurchaseState::Start],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &PurchaseState {
        self.history.last().unwrap_or(&START)
    }

    pub fn history(&self) -> &[PurchaseState] {
        &self.history
    }

    pub fn advance(&mut self, next: PurchaseState) {
        debug_assert!(
            self.state().can_transition_to(&next),
            "illegal purchase transition {:?} -> {next:?}",
            self.state()
        );
        log::trace!("purchase {}: {:?} -> {next:?}", self.id, self.state());
        self.history.push(next);
    }

    /// Moves to `Rejected` and hands the error back for propagation.
    pub fn reject<E>(&mut self, error: E) -> E
    where
        E: Into<RejectReason> + Clone + fmt::Display,
    {
        log::warn!("purchase {}: rejected: {error}", self.id);
        self.advance(PurchaseState::Rejected(error.clone().into()));
        error
    }

    /// Moves to `Failed` and hands the collaborator error back untouched.
    pub fn fail<E: fmt::Display>(&mut self, collaborator: Collaborator, error: E) -> E {
        log::error!(
            "purchase {}: error processing {collaborator}: {error}",
            self.id
        );
        self.advance(PurchaseState::Failed {
            collaborator,
            error: error.to_string(),
        });
        error
    }
}

impl Default for PurchaseFlow {
    fn default() -> Self {
        Self::new()
    }
}
