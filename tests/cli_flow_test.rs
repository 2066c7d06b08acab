#![cfg(feature = "cli")]

use clap::Parser;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use ticket_service::app;
use ticket_service::{
    CliConfig, PurchaseSummary, SeatReservationService, TicketConfig, TicketPaymentService,
};

#[derive(Clone, Default)]
struct RecordingPayment {
    calls: Arc<Mutex<Vec<(i64, u32)>>>,
    decline: bool,
}

impl TicketPaymentService for RecordingPayment {
    fn make_payment(&self, account_id: i64, amount_to_pay: u32) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push((account_id, amount_to_pay));
        if self.decline {
            anyhow::bail!("card declined");
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingReservation {
    calls: Arc<Mutex<Vec<(i64, u32)>>>,
}

impl SeatReservationService for RecordingReservation {
    fn reserve_seat(&self, account_id: i64, seats_to_reserve: u32) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push((account_id, seats_to_reserve));
        Ok(())
    }
}

fn cli(args: &[&str]) -> CliConfig {
    let mut argv = vec!["ticket-service"];
    argv.extend_from_slice(args);
    CliConfig::try_parse_from(argv).unwrap()
}

#[test]
fn test_dry_run_makes_no_collaborator_calls() {
    let cli = cli(&["--account-id", "1", "--ticket", "ADULT=2,CHILD=1", "--dry-run"]);
    let config = app::load_config(&cli).unwrap();
    let payment = RecordingPayment::default();
    let reservation = RecordingReservation::default();

    let summary = app::execute(&cli, &config, payment.clone(), reservation.clone()).unwrap();

    assert_eq!(summary.total_amount, 65);
    assert_eq!(summary.total_seats, 3);
    assert!(payment.calls.lock().unwrap().is_empty());
    assert!(reservation.calls.lock().unwrap().is_empty());

    let output = app::render_summary(&summary, &cli).unwrap();
    assert!(output.starts_with("📋 Quote for account 1:"));
    assert!(output.contains("Amount: £65"));
}

#[test]
fn test_purchase_calls_payment_then_reservation() {
    let cli = cli(&["--account-id", "4", "--ticket", "ADULT=3"]);
    let config = app::load_config(&cli).unwrap();
    let payment = RecordingPayment::default();
    let reservation = RecordingReservation::default();

    let summary = app::execute(&cli, &config, payment.clone(), reservation.clone()).unwrap();

    assert_eq!(summary.total_amount, 75);
    assert_eq!(*payment.calls.lock().unwrap(), vec![(4, 75)]);
    assert_eq!(*reservation.calls.lock().unwrap(), vec![(4, 3)]);
}

#[test]
fn test_json_output_is_the_summary() {
    let cli = cli(&["--account-id", "2", "--ticket", "ADULT=1,INFANT=1", "--json"]);
    let config = app::load_config(&cli).unwrap();

    let summary = app::execute(
        &cli,
        &config,
        RecordingPayment::default(),
        RecordingReservation::default(),
    )
    .unwrap();
    let output = app::render_summary(&summary, &cli).unwrap();

    let parsed: PurchaseSummary = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, summary);
    assert_eq!(parsed.total_amount, 25);
    assert_eq!(parsed.total_seats, 1);
    assert_eq!(parsed.infant_tickets, 1);
}

#[test]
fn test_missing_config_file_exits_1() {
    let cli = cli(&["--account-id", "1", "--config", "/nonexistent/tickets.toml"]);
    let err = app::load_config(&cli).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_invalid_config_values_exit_1() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[limits]\nmax_tickets_per_purchase = 0\n")
        .unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();

    let cli = cli(&["--account-id", "1", "--config", &path]);
    let err = app::load_config(&cli).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_rejected_purchase_exits_1_without_calls() {
    let cli = cli(&["--account-id", "1", "--ticket", "CHILD=1"]);
    let payment = RecordingPayment::default();
    let reservation = RecordingReservation::default();

    let err = app::execute(
        &cli,
        &TicketConfig::default(),
        payment.clone(),
        reservation.clone(),
    )
    .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert!(payment.calls.lock().unwrap().is_empty());
    assert!(reservation.calls.lock().unwrap().is_empty());
}

#[test]
fn test_collaborator_failure_exits_2() {
    let cli = cli(&["--account-id", "1", "--ticket", "ADULT=1"]);
    let payment = RecordingPayment {
        decline: true,
        ..RecordingPayment::default()
    };
    let reservation = RecordingReservation::default();

    let err = app::execute(&cli, &TicketConfig::default(), payment, reservation.clone())
        .unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(reservation.calls.lock().unwrap().is_empty());
}

#[test]
fn test_config_file_prices_reach_the_purchase() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[pricing]\nadult = 30\n").unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();

    let cli = cli(&["--account-id", "1", "--ticket", "ADULT=2", "--config", &path]);
    let config = app::load_config(&cli).unwrap();
    let payment = RecordingPayment::default();

    app::execute(&cli, &config, payment.clone(), RecordingReservation::default()).unwrap();

    assert_eq!(*payment.calls.lock().unwrap(), vec![(1, 60)]);
}
