use crate::config::{CliConfig, TicketConfig};
use crate::core::ticket_service::TicketServiceImpl;
use crate::domain::model::PurchaseSummary;
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub fn load_config(cli: &CliConfig) -> Result<TicketConfig> {
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => TicketConfig::from_file(path)?,
        None => TicketConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Runs the purchase described by `cli`. With `--dry-run` the collaborators
/// are never called.
pub fn execute<P, R>(
    cli: &CliConfig,
    config: &TicketConfig,
    payment_service: P,
    reservation_service: R,
) -> Result<PurchaseSummary>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    let service = TicketServiceImpl::with_rules(payment_service, reservation_service, config.rules());

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no payment or reservation will be made");
        service.quote(cli.account_id, &cli.tickets)
    } else {
        service.process(cli.account_id, &cli.tickets)
    }
}

pub fn render_summary(summary: &PurchaseSummary, cli: &CliConfig) -> Result<String> {
    if cli.json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }

    let heading = if cli.dry_run {
        format!("📋 Quote for account {}:", summary.account_id)
    } else {
        format!("✅ Purchase completed for account {}:", summary.account_id)
    };
    Ok(format!(
        "{}\n  Tickets: {} adult, {} child, {} infant\n  Amount: £{}\n  Seats: {}",
        heading,
        summary.adult_tickets,
        summary.child_tickets,
        summary.infant_tickets,
        summary.total_amount,
        summary.total_seats
    ))
}
