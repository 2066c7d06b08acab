use crate::domain::ports::SeatReservationService;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: i64, seats_to_reserve: u32) -> anyhow::Result<()> {
        tracing::info!(account_id, seats_to_reserve, "Seats reserved");
        Ok(())
    }
}
