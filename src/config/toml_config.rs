use crate::domain::model::{PriceTable, PurchaseLimits, PurchaseRules};
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_FORMATS: [&str; 2] = ["compact", "json"];
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Every section is optional; missing values fall back to the standard
/// prices and the 25 ticket limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    pub pricing: PriceTable,
    pub limits: PurchaseLimits,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: String,
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "compact".to_string(),
            level: None,
        }
    }
}

impl TicketConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TicketError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TicketError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn rules(&self) -> PurchaseRules {
        PurchaseRules {
            prices: self.pricing,
            limits: self.limits,
        }
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for TicketConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range(
            "limits.max_tickets_per_purchase",
            self.limits.max_tickets_per_purchase,
            1,
            1000,
        )?;

        // A full purchase at the highest price must still fit in the amount type.
        let max_price = u32::MAX / self.limits.max_tickets_per_purchase;
        for (field, price) in [
            ("pricing.adult", self.pricing.adult),
            ("pricing.child", self.pricing.child),
            ("pricing.infant", self.pricing.infant),
        ] {
            validation::validate_range(field, price, 0, max_price)?;
        }

        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
