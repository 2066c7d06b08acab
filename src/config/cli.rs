use crate::domain::model::TicketTypeRequest;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ticket-service")]
#[command(about = "Validate and process a ticket purchase")]
pub struct CliConfig {
    /// Purchasing account. Must be positive.
    #[arg(long, allow_negative_numbers = true)]
    pub account_id: Option<i64>,

    /// Tickets to buy as TYPE=COUNT, e.g. --ticket ADULT=2 --ticket CHILD=1
    #[arg(long = "ticket", value_delimiter = ',')]
    pub tickets: Vec<TicketTypeRequest>,

    /// Path to TOML configuration file with pricing and limits
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only validate and price the purchase
    #[arg(long)]
    pub dry_run: bool,

    /// Print the purchase summary as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
