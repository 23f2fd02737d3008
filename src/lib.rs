pub mod definitions;
pub mod helpers;
pub mod models;
pub mod services;

pub use definitions::{
    purchase_plan::PurchasePlan,
    purchase_state::{Collaborator, PurchaseFlow, PurchaseState, RejectReason},
    ticket_service::TicketService,
};
pub use models::{
    account::AccountId,
    error::{InvalidPurchaseError, PolicyError, PurchaseError, TypeValidationError},
    policy::{PriceTable, PurchasePolicy, MAX_TICKETS_PER_PURCHASE},
    ticket::{RawTicketRequest, TicketRequest, TicketType},
};
pub use services::gateway::{GatewayError, SeatReservationService, TicketPaymentService};
