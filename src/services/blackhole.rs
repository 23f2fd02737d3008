use crate::models::account::AccountId;

use super::gateway::{GatewayError, SeatReservationService, TicketPaymentService};

#[derive(Debug, Default, Clone)]
pub struct Blackhole {}

#[async_trait::async_trait]
impl TicketPaymentService for Blackhole {
    type Error = GatewayError;

    async fn make_payment(&self, _account_id: AccountId, _amount: u64) -> Result<(), GatewayError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl SeatReservationService for Blackhole {
    type Error = GatewayError;

    async fn reserve_seat(&self, _account_id: AccountId, _seats: u32) -> Result<(), GatewayError> {
        Ok(())
    }
}
