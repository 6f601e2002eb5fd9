use crate::model::id::{TicketId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub departure_destination: String,
    pub arrival_destination: String,
    pub seat_class: String,
    pub seat_number: String,
    pub departure_date: DateTime<Utc>,
    pub owner_id: UserId,
}
