pub mod pricing;
pub mod ticket_service;

pub use crate::domain::model::{PurchaseRules, PurchaseSummary, TicketType, TicketTypeRequest};
pub use crate::domain::ports::{SeatReservationService, TicketPaymentService, TicketService};
pub use crate::utils::error::Result;
