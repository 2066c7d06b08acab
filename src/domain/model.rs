use crate::utils::error::TicketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub fn price(self, prices: &PriceTable) -> u32 {
        match self {
            TicketType::Adult => prices.adult,
            TicketType::Child => prices.child,
            TicketType::Infant => prices.infant,
        }
    }

    /// Infants sit on an adult's lap.
    pub fn seats_per_ticket(self) -> u32 {
        match self {
            TicketType::Adult | TicketType::Child => 1,
            TicketType::Infant => 0,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        };
        f.write_str(name)
    }
}

impl FromStr for TicketType {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(TicketError::ParseError {
                input: s.to_string(),
                reason: "expected one of ADULT, CHILD, INFANT".to_string(),
            }),
        }
    }
}

/// A request for `no_of_tickets` tickets of one type. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

impl FromStr for TicketTypeRequest {
    type Err = TicketError;

    /// Parses `ADULT=3` or `child:2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, count) = s.split_once(['=', ':']).ok_or_else(|| TicketError::ParseError {
            input: s.to_string(),
            reason: "expected TYPE=COUNT".to_string(),
        })?;

        let ticket_type = kind.parse::<TicketType>()?;
        let no_of_tickets = count
            .trim()
            .parse::<u32>()
            .map_err(|e| TicketError::ParseError {
                input: s.to_string(),
                reason: format!("invalid ticket count: {}", e),
            })?;

        Ok(Self::new(ticket_type, no_of_tickets))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: 25,
            child: 15,
            infant: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseLimits {
    pub max_tickets_per_purchase: u32,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: 25,
        }
    }
}

/// Prices and limits a processor applies to every purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseRules {
    pub prices: PriceTable,
    pub limits: PurchaseLimits,
}

/// Aggregated view of one purchase request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub account_id: i64,
    pub adult_tickets: u32,
    pub child_tickets: u32,
    pub infant_tickets: u32,
    pub total_tickets: u32,
    pub total_amount: u32,
    pub total_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ticket_type_request() {
        let request: TicketTypeRequest = "ADULT=3".parse().unwrap();
        assert_eq!(request.ticket_type(), TicketType::Adult);
        assert_eq!(request.no_of_tickets(), 3);

        let request: TicketTypeRequest = "infant:0".parse().unwrap();
        assert_eq!(request, TicketTypeRequest::new(TicketType::Infant, 0));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("ADULT".parse::<TicketTypeRequest>().is_err());
        assert!("SENIOR=2".parse::<TicketTypeRequest>().is_err());
        assert!("CHILD=-1".parse::<TicketTypeRequest>().is_err());
        assert!("CHILD=two".parse::<TicketTypeRequest>().is_err());
    }

    #[test]
    fn test_default_prices_and_seats() {
        let prices = PriceTable::default();
        assert_eq!(TicketType::Adult.price(&prices), 25);
        assert_eq!(TicketType::Child.price(&prices), 15);
        assert_eq!(TicketType::Infant.price(&prices), 0);

        assert_eq!(TicketType::Adult.seats_per_ticket(), 1);
        assert_eq!(TicketType::Child.seats_per_ticket(), 1);
        assert_eq!(TicketType::Infant.seats_per_ticket(), 0);
        assert_eq!(PurchaseLimits::default().max_tickets_per_purchase, 25);
    }

    #[test]
    fn test_ticket_type_display_round_trips_through_parse() {
        for ticket_type in TicketType::ALL {
            assert_eq!(ticket_type.to_string().parse::<TicketType>().unwrap(), ticket_type);
        }
    }
}
