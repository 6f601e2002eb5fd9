use crate::model::ticket::{
    CreateTicketRequest, DeleteAllTicketsResponse, DeleteTicketResponse, TicketListQuery,
    TicketQuery, TicketResponse, TicketsResponse,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::UserId, ticket::event::DeleteTicket};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_ticket(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateTicketRequest>,
) -> AppResult<Json<TicketResponse>> {
    req.validate(&())?;

    // A ticket cannot exist without a valid owner.
    registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("user not found".into()))?;

    registry
        .ticket_repository()
        .create(user_id, req.into())
        .await
        .map(TicketResponse::from)
        .map(Json)
}

pub async fn show_ticket_list(
    Query(query): Query<TicketListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketsResponse>> {
    query.validate(&())?;

    registry
        .ticket_repository()
        .find_all(query.into())
        .await
        .map(TicketsResponse::from)
        .map(Json)
}

pub async fn show_ticket(
    Path(user_id): Path<UserId>,
    Query(query): Query<TicketQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketResponse>> {
    registry
        .ticket_repository()
        .find_by_id(user_id, query.ticket_id)
        .await
        .and_then(|ticket| match ticket {
            Some(ticket) => Ok(Json(ticket.into())),
            None => Err(AppError::EntityNotFound("ticket not found".into())),
        })
}

pub async fn show_every_ticket(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketsResponse>> {
    registry
        .ticket_repository()
        .find_all_by_owner(user_id)
        .await
        .map(TicketsResponse::from)
        .map(Json)
}

pub async fn delete_ticket(
    Path(user_id): Path<UserId>,
    Query(query): Query<TicketQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DeleteTicketResponse>> {
    registry
        .ticket_repository()
        .find_by_id(user_id, query.ticket_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("ticket not found".into()))?;

    registry
        .ticket_repository()
        .delete(DeleteTicket::new(query.ticket_id, user_id))
        .await?;
    Ok(Json(DeleteTicketResponse::new(user_id, query.ticket_id)))
}

pub async fn delete_every_ticket(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DeleteAllTicketsResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("user not found".into()))?;

    let owned = registry
        .ticket_repository()
        .find_all_by_owner(user_id)
        .await?;
    registry
        .ticket_repository()
        .delete_all_by_owner(user_id)
        .await?;
    Ok(Json(DeleteAllTicketsResponse::new(user_id, owned.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::model::{
        id::TicketId,
        ticket::Ticket,
        user::User,
    };
    use kernel::repository::{
        health::MockHealthCheckRepository, ticket::MockTicketRepository,
        user::MockUserRepository,
    };
    use std::sync::Arc;

    fn registry(user: MockUserRepository, ticket: MockTicketRepository) -> AppRegistry {
        AppRegistry::with_repositories(
            Arc::new(MockHealthCheckRepository::new()),
            Arc::new(user),
            Arc::new(ticket),
        )
    }

    fn sample_ticket(owner_id: UserId) -> Ticket {
        Ticket {
            ticket_id: TicketId::new(),
            departure_destination: "Tokyo".into(),
            arrival_destination: "Osaka".into(),
            seat_class: "economy".into(),
            seat_number: "12A".into(),
            departure_date: Utc::now(),
            owner_id,
        }
    }

    fn existing_user(user_id: UserId) -> User {
        User {
            user_id,
            email: "alice@example.com".into(),
            full_name: None,
            age: None,
            sex: None,
        }
    }

    fn create_request() -> CreateTicketRequest {
        CreateTicketRequest {
            departure_destination: "Tokyo".into(),
            arrival_destination: "Osaka".into(),
            seat_class: "economy".into(),
            seat_number: "12A".into(),
            departure_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn register_ticket_requires_an_existing_owner() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(|_| Ok(None));
        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo.expect_create().never();

        let res = register_ticket(
            Path(UserId::new()),
            State(registry(user_repo, ticket_repo)),
            Json(create_request()),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn register_ticket_binds_the_owner() {
        let owner_id = UserId::new();
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(existing_user(id))));
        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo
            .expect_create()
            .withf(move |id, _| *id == owner_id)
            .returning(|id, event| {
                Ok(Ticket {
                    ticket_id: TicketId::new(),
                    departure_destination: event.departure_destination,
                    arrival_destination: event.arrival_destination,
                    seat_class: event.seat_class,
                    seat_number: event.seat_number,
                    departure_date: event.departure_date,
                    owner_id: id,
                })
            });

        let Json(res) = register_ticket(
            Path(owner_id),
            State(registry(user_repo, ticket_repo)),
            Json(create_request()),
        )
        .await
        .unwrap();
        assert_eq!(res.owner_id, owner_id);
    }

    #[tokio::test]
    async fn show_ticket_hides_other_owners_tickets() {
        let mut ticket_repo = MockTicketRepository::new();
        // The scoped lookup reports absence even when the ticket exists
        // under a different owner.
        ticket_repo.expect_find_by_id().returning(|_, _| Ok(None));

        let res = show_ticket(
            Path(UserId::new()),
            Query(TicketQuery {
                ticket_id: TicketId::new(),
            }),
            State(registry(MockUserRepository::new(), ticket_repo)),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn show_ticket_list_on_empty_store_is_empty() {
        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo.expect_find_all().returning(|_| Ok(vec![]));

        let Json(res) = show_ticket_list(
            Query(TicketListQuery {
                limit: 100,
                offset: 0,
            }),
            State(registry(MockUserRepository::new(), ticket_repo)),
        )
        .await
        .unwrap();
        assert!(res.items.is_empty());
    }

    #[tokio::test]
    async fn delete_ticket_checks_scoped_existence_first() {
        let owner_id = UserId::new();
        let ticket_id = TicketId::new();
        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo.expect_find_by_id().returning(|owner, id| {
            let mut ticket = sample_ticket(owner);
            ticket.ticket_id = id;
            Ok(Some(ticket))
        });
        ticket_repo
            .expect_delete()
            .withf(move |event| event.owner_id == owner_id && event.ticket_id == ticket_id)
            .times(1)
            .returning(|_| Ok(()));

        let Json(res) = delete_ticket(
            Path(owner_id),
            Query(TicketQuery { ticket_id }),
            State(registry(MockUserRepository::new(), ticket_repo)),
        )
        .await
        .unwrap();
        assert_eq!(res.ticket_id, ticket_id);
        assert_eq!(res.owner_id, owner_id);
    }

    #[tokio::test]
    async fn delete_every_ticket_reports_the_deleted_count() {
        let owner_id = UserId::new();
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(existing_user(id))));
        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo
            .expect_find_all_by_owner()
            .returning(|owner| Ok(vec![sample_ticket(owner), sample_ticket(owner)]));
        ticket_repo
            .expect_delete_all_by_owner()
            .times(1)
            .returning(|_| Ok(()));

        let Json(res) = delete_every_ticket(
            Path(owner_id),
            State(registry(user_repo, ticket_repo)),
        )
        .await
        .unwrap();
        assert_eq!(res.owner_id, owner_id);
        assert_eq!(res.deleted_tickets, 2);
    }
}
