use crate::model::{
    id::{TicketId, UserId},
    list::ListOptions,
    ticket::{
        event::{CreateTicket, DeleteTicket},
        Ticket,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mockall", mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    // Caller validates owner existence before this is invoked.
    async fn create(&self, owner_id: UserId, event: CreateTicket) -> AppResult<Ticket>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Ticket>>;
    // Ownership-scoped: `None` when the ticket belongs to a different owner,
    // even if the identifier exists globally.
    async fn find_by_id(&self, owner_id: UserId, ticket_id: TicketId)
        -> AppResult<Option<Ticket>>;
    async fn find_all_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Ticket>>;
    async fn delete(&self, event: DeleteTicket) -> AppResult<()>;
    // One delete per ticket, each independently committed.
    async fn delete_all_by_owner(&self, owner_id: UserId) -> AppResult<()>;
}
