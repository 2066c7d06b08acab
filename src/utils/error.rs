use thiserror::Error;

/// Business-rule violations detected before any collaborator is called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    #[error("Invalid account ID.")]
    InvalidAccount,

    #[error("Cannot purchase more than {max} tickets at a time.")]
    TooManyTickets { requested: u32, max: u32 },

    #[error("Child tickets cannot be purchased without at least one Adult ticket.")]
    AdultRequired,
}

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Invalid purchase: {0}")]
    InvalidPurchase(#[from] InvalidPurchaseError),

    #[error("Payment failed: {0}")]
    PaymentFailed(#[source] anyhow::Error),

    #[error("Seat reservation failed: {0}")]
    ReservationFailed(#[source] anyhow::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Total payment for {tickets} tickets does not fit the configured prices")]
    AmountOverflow { tickets: u32 },

    #[error("Cannot parse '{input}': {reason}")]
    ParseError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Purchase,
    Collaborator,
    Configuration,
    System,
}

impl TicketError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TicketError::InvalidPurchase(_) => ErrorCategory::Purchase,
            TicketError::PaymentFailed(_) | TicketError::ReservationFailed(_) => {
                ErrorCategory::Collaborator
            }
            TicketError::IoError(_)
            | TicketError::ConfigValidationError { .. }
            | TicketError::InvalidConfigValueError { .. }
            | TicketError::AmountOverflow { .. }
            | TicketError::ParseError { .. } => ErrorCategory::Configuration,
            TicketError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TicketError::InvalidPurchase(reason) => format!("Purchase rejected: {}", reason),
            TicketError::PaymentFailed(_) => {
                "The payment could not be taken. No seats were reserved.".to_string()
            }
            TicketError::ReservationFailed(_) => {
                "Payment was taken but the seats could not be reserved.".to_string()
            }
            TicketError::ConfigValidationError { field, .. }
            | TicketError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem with '{}': {}", field, self)
            }
            TicketError::AmountOverflow { .. } => {
                format!("{}. Lower the [pricing] values.", self)
            }
            TicketError::ParseError { input, reason } => {
                format!("Could not understand '{}': {}", input, reason)
            }
            TicketError::IoError(e) => format!("File access failed: {}", e),
            TicketError::SerializationError(e) => format!("Output could not be written: {}", e),
        }
    }

    /// 1 for rejected input or configuration, 2 when a collaborator failed,
    /// 3 when the summary could not be written.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Purchase | ErrorCategory::Configuration => 1,
            ErrorCategory::Collaborator => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
