use crate::model::id::{TicketId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateTicket {
    pub departure_destination: String,
    pub arrival_destination: String,
    pub seat_class: String,
    pub seat_number: String,
    pub departure_date: DateTime<Utc>,
}

/// Scoped by both owner and ticket so one user cannot delete another's
/// ticket by guessing an identifier.
#[derive(Debug, new)]
pub struct DeleteTicket {
    pub ticket_id: TicketId,
    pub owner_id: UserId,
}
