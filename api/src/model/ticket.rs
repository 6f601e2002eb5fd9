use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{TicketId, UserId},
    list::ListOptions,
    ticket::{event::CreateTicket, Ticket},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[garde(length(min = 1))]
    pub departure_destination: String,
    #[garde(length(min = 1))]
    pub arrival_destination: String,
    #[garde(length(min = 1))]
    pub seat_class: String,
    #[garde(length(min = 1))]
    pub seat_number: String,
    #[garde(skip)]
    pub departure_date: DateTime<Utc>,
}

impl From<CreateTicketRequest> for CreateTicket {
    fn from(value: CreateTicketRequest) -> Self {
        let CreateTicketRequest {
            departure_destination,
            arrival_destination,
            seat_class,
            seat_number,
            departure_date,
        } = value;
        Self {
            departure_destination,
            arrival_destination,
            seat_class,
            seat_number,
            departure_date,
        }
    }
}

const DEFAULT_LIMIT: i64 = 100;
const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TicketListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
}

impl From<TicketListQuery> for ListOptions {
    fn from(value: TicketListQuery) -> Self {
        let TicketListQuery { limit, offset } = value;
        Self { limit, offset }
    }
}

/// The single-ticket endpoints take the ticket id as a query parameter,
/// with the owner id in the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketQuery {
    pub ticket_id: TicketId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsResponse {
    pub items: Vec<TicketResponse>,
}

impl From<Vec<Ticket>> for TicketsResponse {
    fn from(value: Vec<Ticket>) -> Self {
        Self {
            items: value.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub ticket_id: TicketId,
    pub departure_destination: String,
    pub arrival_destination: String,
    pub seat_class: String,
    pub seat_number: String,
    pub departure_date: DateTime<Utc>,
    pub owner_id: UserId,
}

impl From<Ticket> for TicketResponse {
    fn from(value: Ticket) -> Self {
        let Ticket {
            ticket_id,
            departure_destination,
            arrival_destination,
            seat_class,
            seat_number,
            departure_date,
            owner_id,
        } = value;
        Self {
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

#[derive(Debug, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTicketResponse {
    pub owner_id: UserId,
    pub ticket_id: TicketId,
}

#[derive(Debug, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllTicketsResponse {
    pub owner_id: UserId,
    pub deleted_tickets: usize,
}
