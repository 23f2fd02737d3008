use std::error::Error;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::account::AccountId;

/// Charges an account for a purchase.
#[async_trait]
pub trait TicketPaymentService {
    type Error: Error + Send + Sync + 'static;

    async fn make_payment(&self, account_id: AccountId, amount_to_pay: u64)
        -> Result<(), Self::Error>;
}

/// Allocates seats for an account.
#[async_trait]
pub trait SeatReservationService {
    type Error: Error + Send + Sync + 'static;

    async fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Declined: {0}")]
    Declined(String),
    #[error("Unavailable: {0}")]
    Unavailable(String),
}
