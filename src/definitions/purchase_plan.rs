use serde::Serialize;

use crate::models::{
    account::AccountId,
    error::InvalidPurchaseError,
    policy::{PriceTable, PurchasePolicy},
    ticket::{TicketRequest, TicketType},
};

use super::purchase_state::{PurchaseFlow, PurchaseState};

/// A batch that passed every purchase rule, with its totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchasePlan {
    pub account_id: AccountId,
    pub total_tickets: u32,
    pub total_amount: u64,
    pub total_seats: u32,
}

impl PurchasePlan {
    /// Runs the quantity and adult checks for an already validated account.
    pub fn build(
        flow: &mut PurchaseFlow,
        account_id: AccountId,
        requests: &[TicketRequest],
        policy: &PurchasePolicy,
    ) -> Result<Self, InvalidPurchaseError> {
        let total_tickets =
            count_tickets(requests, policy.max_tickets_per_purchase).map_err(|e| flow.reject(e))?;
        flow.advance(PurchaseState::QuantityValidated);

        require_adult(requests).map_err(|e| flow.reject(e))?;
        flow.advance(PurchaseState::AdultPresenceValidated);

        let plan = Self {
            account_id,
            total_tickets,
            total_amount: total_amount(requests, &policy.prices),
            total_seats: total_seats(requests),
        };
        log::debug!(
            "purchase {}: account {} tickets {} amount {} seats {}",
            flow.id(),
            plan.account_id,
            plan.total_tickets,
            plan.total_amount,
            plan.total_seats
        );
        Ok(plan)
    }
}

fn count_tickets(requests: &[TicketRequest], max: u32) -> Result<u32, InvalidPurchaseError> {
    let requested: u64 = requests.iter().map(|r| u64::from(r.quantity())).sum();
    if requested < 1 {
        Err(InvalidPurchaseError::NoTickets)
    } else if requested > u64::from(max) {
        Err(InvalidPurchaseError::TooManyTickets { requested, max })
    } else {
        Ok(requested as u32)
    }
}

fn require_adult(requests: &[TicketRequest]) -> Result<(), InvalidPurchaseError> {
    if requests
        .iter()
        .any(|r| r.ticket_type() == TicketType::Adult)
    {
        Ok(())
    } else {
        Err(InvalidPurchaseError::AdultRequired)
    }
}

pub fn total_amount(requests: &[TicketRequest], prices: &PriceTable) -> u64 {
    requests
        .iter()
        .map(|r| u64::from(prices.price(r.ticket_type())) * u64::from(r.quantity()))
        .sum()
}

pub fn total_seats(requests: &[TicketRequest]) -> u32 {
    requests
        .iter()
        .filter(|r| r.ticket_type().needs_seat())
        .map(|r| r.quantity())
        .sum()
}
