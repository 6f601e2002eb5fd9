use crate::database::{
    model::ticket::{TicketIdRow, TicketRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{TicketId, UserId},
    list::ListOptions,
    ticket::{
        event::{CreateTicket, DeleteTicket},
        Ticket,
    },
};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgPool;

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

/// Deletes one ticket scoped by both owner and ticket id, returning the
/// number of rows removed. Shared with the user cascade so "delete a user's
/// ticket" has exactly one definition.
pub(crate) async fn delete_ticket_scoped(
    pool: &PgPool,
    owner_id: UserId,
    ticket_id: TicketId,
) -> AppResult<u64> {
    let res = sqlx::query(
        r#"
            DELETE FROM tickets
            WHERE owner_id = $1 AND ticket_id = $2
        "#,
    )
    .bind(owner_id)
    .bind(ticket_id)
    .execute(pool)
    .await
    .map_err(AppError::SpecificOperationError)?;

    Ok(res.rows_affected())
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn create(&self, owner_id: UserId, event: CreateTicket) -> AppResult<Ticket> {
        let ticket_id = TicketId::new();
        sqlx::query(
            r#"
                INSERT INTO tickets (
                    ticket_id,
                    departure_destination,
                    arrival_destination,
                    seat_class,
                    seat_number,
                    departure_date,
                    owner_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(ticket_id)
        .bind(&event.departure_destination)
        .bind(&event.arrival_destination)
        .bind(&event.seat_class)
        .bind(&event.seat_number)
        .bind(event.departure_date)
        .bind(owner_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(de) if de.is_unique_violation() => {
                AppError::UnprocessableEntity(format!(
                    "seat number {} is already taken",
                    event.seat_number
                ))
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        let CreateTicket {
            departure_destination,
            arrival_destination,
            seat_class,
            seat_number,
            departure_date,
        } = event;
        Ok(Ticket {
            ticket_id,
            departure_destination,
            arrival_destination,
            seat_class,
            seat_number,
            departure_date,
            owner_id,
        })
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Ticket>> {
        let rows: Vec<TicketRow> = sqlx::query_as(
            r#"
                SELECT
                    ticket_id,
                    departure_destination,
                    arrival_destination,
                    seat_class,
                    seat_number,
                    departure_date,
                    owner_id
                FROM tickets
                ORDER BY departure_date
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    async fn find_by_id(
        &self,
        owner_id: UserId,
        ticket_id: TicketId,
    ) -> AppResult<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
                SELECT
                    ticket_id,
                    departure_destination,
                    arrival_destination,
                    seat_class,
                    seat_number,
                    departure_date,
                    owner_id
                FROM tickets
                WHERE owner_id = $1 AND ticket_id = $2
            "#,
        )
        .bind(owner_id)
        .bind(ticket_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Ticket::from))
    }

    async fn find_all_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Ticket>> {
        let rows: Vec<TicketRow> = sqlx::query_as(
            r#"
                SELECT
                    ticket_id,
                    departure_destination,
                    arrival_destination,
                    seat_class,
                    seat_number,
                    departure_date,
                    owner_id
                FROM tickets
                WHERE owner_id = $1
                ORDER BY departure_date
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    async fn delete(&self, event: DeleteTicket) -> AppResult<()> {
        let deleted =
            delete_ticket_scoped(self.db.inner_ref(), event.owner_id, event.ticket_id).await?;
        if deleted < 1 {
            // Existence checking belongs to the caller, so a miss is not an
            // error here.
            tracing::warn!(
                owner_id = %event.owner_id,
                ticket_id = %event.ticket_id,
                "delete_ticket matched no rows"
            );
        }
        Ok(())
    }

    async fn delete_all_by_owner(&self, owner_id: UserId) -> AppResult<()> {
        let owned: Vec<TicketIdRow> = sqlx::query_as(
            r#"
                SELECT ticket_id FROM tickets WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // One delete per ticket, each committed on its own. A failure partway
        // through leaves the earlier deletions in place.
        for row in owned {
            delete_ticket_scoped(self.db.inner_ref(), owner_id, row.ticket_id).await?;
        }
        Ok(())
    }
}
