use crate::domain::model::{PurchaseRules, PurchaseSummary, TicketType, TicketTypeRequest};
use crate::utils::error::{InvalidPurchaseError, Result, TicketError};

pub fn validate_account_id(account_id: Option<i64>) -> Result<i64> {
    match account_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(InvalidPurchaseError::InvalidAccount.into()),
    }
}

/// Per-type ticket counts. Saturates so oversized requests fail the limit check
/// instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl TicketCounts {
    pub fn tally(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut counts, request| {
            let slot = match request.ticket_type() {
                TicketType::Adult => &mut counts.adult,
                TicketType::Child => &mut counts.child,
                TicketType::Infant => &mut counts.infant,
            };
            *slot = slot.saturating_add(request.no_of_tickets());
            counts
        })
    }

    pub fn get(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    pub fn total(&self) -> u32 {
        self.adult.saturating_add(self.child).saturating_add(self.infant)
    }
}

pub fn validate_composition(counts: &TicketCounts, rules: &PurchaseRules) -> Result<()> {
    let total = counts.total();
    let max = rules.limits.max_tickets_per_purchase;
    if total > max {
        return Err(InvalidPurchaseError::TooManyTickets {
            requested: total,
            max,
        }
        .into());
    }

    // Infant-only purchases are deliberately not rejected here.
    if counts.adult == 0 && counts.child > 0 {
        return Err(InvalidPurchaseError::AdultRequired.into());
    }

    Ok(())
}

/// Fails instead of charging a clamped amount when the prices in `rules`
/// are too large for the requested counts.
pub fn calculate_total_payment(counts: &TicketCounts, rules: &PurchaseRules) -> Result<u32> {
    TicketType::ALL
        .iter()
        .try_fold(0u32, |total, t| {
            counts
                .get(*t)
                .checked_mul(t.price(&rules.prices))
                .and_then(|amount| total.checked_add(amount))
        })
        .ok_or(TicketError::AmountOverflow {
            tickets: counts.total(),
        })
}

pub fn calculate_total_seats(counts: &TicketCounts) -> u32 {
    TicketType::ALL
        .iter()
        .map(|t| counts.get(*t).saturating_mul(t.seats_per_ticket()))
        .fold(0u32, u32::saturating_add)
}

/// Validates the account and composition, then computes totals.
pub fn summarize(
    account_id: Option<i64>,
    requests: &[TicketTypeRequest],
    rules: &PurchaseRules,
) -> Result<PurchaseSummary> {
    let account_id = validate_account_id(account_id)?;
    let counts = TicketCounts::tally(requests);
    validate_composition(&counts, rules)?;

    Ok(PurchaseSummary {
        account_id,
        adult_tickets: counts.adult,
        child_tickets: counts.child,
        infant_tickets: counts.infant,
        total_tickets: counts.total(),
        total_amount: calculate_total_payment(&counts, rules)?,
        total_seats: calculate_total_seats(&counts),
    })
}
