use clap::Parser;
use ticket_service::app;
use ticket_service::utils::logger;
use ticket_service::{CliConfig, LoggingPaymentService, LoggingSeatReservationService, TicketError};

fn main() {
    let cli = CliConfig::parse();

    let config = match app::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let level = config.logging.level.as_deref();
    if config.json_logging() {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Purchase rules: {:?}", config.rules());

    let outcome = app::execute(
        &cli,
        &config,
        LoggingPaymentService::default(),
        LoggingSeatReservationService,
    )
    .and_then(|summary| app::render_summary(&summary, &cli));

    match outcome {
        Ok(output) => println!("{}", output),
        Err(e) => fail(e),
    }
}

fn fail(e: TicketError) -> ! {
    tracing::error!("❌ Purchase failed: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
