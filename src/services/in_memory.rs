use std::sync::{Arc, PoisonError, RwLock};

use crate::models::account::AccountId;

use super::gateway::{GatewayError, SeatReservationService, TicketPaymentService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCall {
    Payment { account_id: AccountId, amount: u64 },
    Reservation { account_id: AccountId, seats: u32 },
}

/// Every call issued to the services sharing it, in issue order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<RwLock<Vec<GatewayCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[derive(Debug, Default)]
struct GatewayState<T> {
    accepted: Vec<(AccountId, T)>,
    fail_with: Option<GatewayError>,
}

impl<T> GatewayState<T> {
    fn accept(&mut self, account_id: AccountId, value: T) -> Result<(), GatewayError> {
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        self.accepted.push((account_id, value));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    state: Arc<RwLock<GatewayState<u64>>>,
    log: CallLog,
}

impl InMemoryPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call_log(log: CallLog) -> Self {
        Self {
            state: Default::default(),
            log,
        }
    }

    /// Fails every following payment with `error`, `None` restores success.
    pub fn set_fail_on_payment(&self, error: Option<GatewayError>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_with = error;
    }

    /// Accepted payments as (account, amount).
    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .accepted
            .clone()
    }
}

#[async_trait::async_trait]
impl TicketPaymentService for InMemoryPaymentService {
    type Error = GatewayError;

    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), GatewayError> {
        self.log.record(GatewayCall::Payment { account_id, amount });
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .accept(account_id, amount)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<GatewayState<u32>>>,
    log: CallLog,
}

impl InMemorySeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call_log(log: CallLog) -> Self {
        Self {
            state: Default::default(),
            log,
        }
    }

    pub fn set_fail_on_reservation(&self, error: Option<GatewayError>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_with = error;
    }

    /// Accepted reservations as (account, seats).
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .accepted
            .clone()
    }
}

#[async_trait::async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    type Error = GatewayError;

    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), GatewayError> {
        self.log.record(GatewayCall::Reservation { account_id, seats });
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .accept(account_id, seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64) -> AccountId {
        AccountId::try_from(id).unwrap()
    }

    #[tokio::test]
    async fn test_shared_call_log_keeps_order() {
        let log = CallLog::new();
        let payment = InMemoryPaymentService::with_call_log(log.clone());
        let reservation = InMemorySeatReservationService::with_call_log(log.clone());

        reservation.reserve_seat(account(2), 4).await.unwrap();
        payment.make_payment(account(1), 30).await.unwrap();

        assert_eq!(
            vec![
                GatewayCall::Reservation {
                    account_id: account(2),
                    seats: 4
                },
                GatewayCall::Payment {
                    account_id: account(1),
                    amount: 30
                },
            ],
            log.calls()
        );
        assert_eq!(vec![(account(1), 30)], payment.payments());
        assert_eq!(vec![(account(2), 4)], reservation.reservations());
    }

    #[tokio::test]
    async fn test_fail_on_payment() {
        let log = CallLog::new();
        let payment = InMemoryPaymentService::with_call_log(log.clone());
        payment.set_fail_on_payment(Some(GatewayError::Declined("card".to_string())));

        let result = payment.make_payment(account(1), 20).await;
        assert_eq!(Err(GatewayError::Declined("card".to_string())), result);
        assert!(payment.payments().is_empty());
        assert_eq!(1, log.calls().len());

        payment.set_fail_on_payment(None);
        payment.make_payment(account(1), 20).await.unwrap();
        assert_eq!(1, payment.payments().len());
    }

    #[tokio::test]
    async fn test_fail_on_reservation() {
        let reservation = InMemorySeatReservationService::new();
        reservation.set_fail_on_reservation(Some(GatewayError::Unavailable("venue".to_string())));

        let result = reservation.reserve_seat(account(5), 2).await;
        assert!(matches!(result, Err(GatewayError::Unavailable(_))));
        assert!(reservation.reservations().is_empty());
    }
}
