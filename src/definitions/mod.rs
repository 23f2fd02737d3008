pub mod purchase_plan;
pub mod purchase_state;
pub mod ticket_service;
