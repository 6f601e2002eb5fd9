use chrono::{DateTime, Utc};
use kernel::model::{
    id::{TicketId, UserId},
    ticket::Ticket,
};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub departure_destination: String,
    pub arrival_destination: String,
    pub seat_class: String,
    pub seat_number: String,
    pub departure_date: DateTime<Utc>,
    pub owner_id: UserId,
}

impl From<TicketRow> for Ticket {
    fn from(value: TicketRow) -> Self {
        let TicketRow {
            ticket_id,
            departure_destination,
            arrival_destination,
            seat_class,
            seat_number,
            departure_date,
            owner_id,
        } = value;
        Ticket {
            ticket_id,
            departure_destination,
            arrival_destination,
            seat_class,
            seat_number,
            departure_date,
            owner_id,
        }
    }
}

// Only the identifiers are needed when walking a cascade.
#[derive(Debug, FromRow)]
pub struct TicketIdRow {
    pub ticket_id: TicketId,
}
