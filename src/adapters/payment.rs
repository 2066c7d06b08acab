use crate::domain::ports::TicketPaymentService;

/// Records charges in the log instead of talking to a gateway.
#[derive(Debug, Clone)]
pub struct LoggingPaymentService {
    currency: String,
}

impl LoggingPaymentService {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl Default for LoggingPaymentService {
    fn default() -> Self {
        Self::new("GBP")
    }
}

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: i64, amount_to_pay: u32) -> anyhow::Result<()> {
        tracing::info!(
            account_id,
            amount_to_pay,
            currency = %self.currency,
            "Payment taken"
        );
        Ok(())
    }
}
