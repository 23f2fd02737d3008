use crate::{
    models::{
        account::AccountId,
        error::PurchaseError,
        policy::PurchasePolicy,
        ticket::{RawTicketRequest, TicketRequest},
    },
    services::gateway::{SeatReservationService, TicketPaymentService},
};

use super::{
    purchase_plan::PurchasePlan,
    purchase_state::{Collaborator, PurchaseFlow, PurchaseState},
};

/// Validates ticket batches and drives payment then seat reservation.
///
/// Holds no state between calls besides the two services and the policy
/// bound at construction.
pub struct TicketService<P, R> {
    payment: P,
    reservation: R,
    policy: PurchasePolicy,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService + Send + Sync,
    R: SeatReservationService<Error = P::Error> + Send + Sync,
{
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_policy(payment, reservation, PurchasePolicy::default())
    }

    pub fn with_policy(payment: P, reservation: R, policy: PurchasePolicy) -> Self {
        Self {
            payment,
            reservation,
            policy,
        }
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Validates and prices a batch without contacting any service.
    pub fn quote(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<PurchasePlan, PurchaseError<P::Error>> {
        let mut flow = PurchaseFlow::new();
        let account_id = validate_account(&mut flow, account_id)?;
        Ok(PurchasePlan::build(
            &mut flow,
            account_id,
            requests,
            &self.policy,
        )?)
    }

    pub async fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError<P::Error>> {
        let mut flow = PurchaseFlow::new();
        let account_id = validate_account(&mut flow, account_id)?;
        self.purchase_for_account(&mut flow, account_id, requests)
            .await
    }

    /// Same as `purchase_tickets` for requests that were not converted yet.
    ///
    /// The account is checked before any request.
    pub async fn purchase_raw(
        &self,
        account_id: i64,
        requests: &[RawTicketRequest],
    ) -> Result<(), PurchaseError<P::Error>> {
        let mut flow = PurchaseFlow::new();
        let account_id = validate_account(&mut flow, account_id)?;
        let requests = requests
            .iter()
            .map(TicketRequest::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| flow.reject(e))?;
        self.purchase_for_account(&mut flow, account_id, &requests)
            .await
    }

    async fn purchase_for_account(
        &self,
        flow: &mut PurchaseFlow,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError<P::Error>> {
        let plan = PurchasePlan::build(flow, account_id, requests, &self.policy)?;
        self.execute(flow, &plan)
            .await
            .map_err(PurchaseError::External)?;
        log::info!(
            "purchase {}: account {} paid {} for {} seats",
            flow.id(),
            plan.account_id,
            plan.total_amount,
            plan.total_seats
        );
        Ok(())
    }

    // reservation is only created once the payment future resolved
    async fn execute(&self, flow: &mut PurchaseFlow, plan: &PurchasePlan) -> Result<(), P::Error> {
        self.payment
            .make_payment(plan.account_id, plan.total_amount)
            .await
            .map_err(|e| flow.fail(Collaborator::Payment, e))?;
        flow.advance(PurchaseState::PaymentIssued);

        self.reservation
            .reserve_seat(plan.account_id, plan.total_seats)
            .await
            .map_err(|e| flow.fail(Collaborator::SeatReservation, e))?;
        flow.advance(PurchaseState::SeatsReserved);
        flow.advance(PurchaseState::Done);
        Ok(())
    }
}

fn validate_account<E>(
    flow: &mut PurchaseFlow,
    account_id: i64,
) -> Result<AccountId, PurchaseError<E>> {
    let account_id = AccountId::try_from(account_id).map_err(|e| flow.reject(e))?;
    flow.advance(PurchaseState::AccountValidated);
    Ok(account_id)
}
