// Adapters layer: stand-ins for the payment gateway and seat booking system.

pub mod payment;
pub mod reservation;

pub use payment::LoggingPaymentService;
pub use reservation::LoggingSeatReservationService;
