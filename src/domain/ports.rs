use crate::domain::model::TicketTypeRequest;
use crate::utils::error::Result;

/// Charges an account. Implemented by the payment gateway.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: i64, amount_to_pay: u32) -> anyhow::Result<()>;
}

/// Reserves seats for an account. Implemented by the seat booking system.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: i64, seats_to_reserve: u32) -> anyhow::Result<()>;
}

pub trait TicketService {
    fn purchase_tickets(&self, account_id: Option<i64>, requests: &[TicketTypeRequest])
        -> Result<()>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: i64, amount_to_pay: u32) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: i64, seats_to_reserve: u32) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, seats_to_reserve)
    }
}
