pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TicketConfig;

pub use crate::adapters::{LoggingPaymentService, LoggingSeatReservationService};
pub use crate::core::ticket_service::TicketServiceImpl;
pub use crate::domain::model::{
    PriceTable, PurchaseLimits, PurchaseRules, PurchaseSummary, TicketType, TicketTypeRequest,
};
pub use crate::domain::ports::{SeatReservationService, TicketPaymentService, TicketService};
pub use crate::utils::error::{InvalidPurchaseError, Result, TicketError};
