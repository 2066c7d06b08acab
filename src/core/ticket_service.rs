use crate::core::pricing;
use crate::domain::model::{PurchaseRules, PurchaseSummary, TicketTypeRequest};
use crate::domain::ports::{SeatReservationService, TicketPaymentService, TicketService};
use crate::utils::error::{Result, TicketError};

pub struct TicketServiceImpl<P: TicketPaymentService, R: SeatReservationService> {
    payment_service: P,
    reservation_service: R,
    rules: PurchaseRules,
}

impl<P: TicketPaymentService, R: SeatReservationService> TicketServiceImpl<P, R> {
    pub fn new(payment_service: P, reservation_service: R) -> Self {
        Self::with_rules(payment_service, reservation_service, PurchaseRules::default())
    }

    pub fn with_rules(payment_service: P, reservation_service: R, rules: PurchaseRules) -> Self {
        Self {
            payment_service,
            reservation_service,
            rules,
        }
    }

    /// Validates the request and computes what it would cost, without
    /// touching the payment or reservation systems.
    pub fn quote(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary> {
        pricing::summarize(account_id, requests, &self.rules).map_err(|e| {
            tracing::warn!("Purchase rejected for account {:?}: {}", account_id, e);
            e
        })
    }

    /// Validates, charges the account, then reserves seats. Returns the summary
    /// of what was charged and reserved.
    pub fn process(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary> {
        let summary = self.quote(account_id, requests)?;
        tracing::debug!(
            "Account {}: {} tickets, amount {}, seats {}",
            summary.account_id,
            summary.total_tickets,
            summary.total_amount,
            summary.total_seats
        );

        self.payment_service
            .make_payment(summary.account_id, summary.total_amount)
            .map_err(TicketError::PaymentFailed)?;

        // Payment is not refunded if this fails.
        self.reservation_service
            .reserve_seat(summary.account_id, summary.total_seats)
            .map_err(TicketError::ReservationFailed)?;

        tracing::info!(
            "Purchase completed for account {}: paid {}, reserved {} seats",
            summary.account_id,
            summary.total_amount,
            summary.total_seats
        );
        Ok(summary)
    }
}

impl<P: TicketPaymentService, R: SeatReservationService> TicketService for TicketServiceImpl<P, R> {
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<()> {
        self.process(account_id, requests).map(|_| ())
    }
}
