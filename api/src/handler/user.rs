use crate::model::user::{
    CreateUserRequest, DeleteUserResponse, UserListQuery, UserResponse, UsersResponse,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::UserId, user::event::DeleteUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;

    // Duplicate check up front; the unique index catches the race.
    if registry
        .user_repository()
        .find_by_email(&req.email)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateEmail(req.email));
    }

    let user = registry.user_repository().create(req.into()).await?;
    Ok(Json(UserResponse::from_user_with_tickets(user, vec![])))
}

pub async fn show_user_list(
    Query(query): Query<UserListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    query.validate(&())?;

    let users = registry.user_repository().find_all(query.into()).await?;
    let mut items = Vec::with_capacity(users.len());
    for user in users {
        let tickets = registry
            .ticket_repository()
            .find_all_by_owner(user.user_id)
            .await?;
        items.push(UserResponse::from_user_with_tickets(user, tickets));
    }
    Ok(Json(UsersResponse { items }))
}

pub async fn show_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    let user = registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("user not found".into()))?;
    let tickets = registry
        .ticket_repository()
        .find_all_by_owner(user_id)
        .await?;
    Ok(Json(UserResponse::from_user_with_tickets(user, tickets)))
}

pub async fn delete_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DeleteUserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("user not found".into()))?;

    registry
        .user_repository()
        .delete(DeleteUser::new(user_id))
        .await?;
    Ok(Json(DeleteUserResponse::new(user_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{ticket::Ticket, user::User};
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

    fn sample_user(email: &str) -> User {
        User {
            user_id: UserId::new(),
            email: email.into(),
            full_name: None,
            age: None,
            sex: None,
        }
    }

    fn sample_ticket(owner_id: UserId, seat_number: &str) -> Ticket {
        Ticket {
            ticket_id: kernel::model::id::TicketId::new(),
            departure_destination: "Tokyo".into(),
            arrival_destination: "Osaka".into(),
            seat_class: "economy".into(),
            seat_number: seat_number.into(),
            departure_date: chrono::Utc::now(),
            owner_id,
        }
    }

    fn create_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.into(),
            password: "open sesame".into(),
            full_name: None,
            age: None,
            sex: None,
        }
    }

    #[tokio::test]
    async fn register_user_rejects_duplicate_email() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .returning(|email| Ok(Some(sample_user(email))));
        user_repo.expect_create().never();

        let res = register_user(
            State(registry(user_repo, MockTicketRepository::new())),
            Json(create_request("alice@example.com")),
        )
        .await;
        assert!(matches!(res, Err(AppError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn register_user_returns_view_without_credentials() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_email().returning(|_| Ok(None));
        user_repo
            .expect_create()
            .returning(|event| Ok(User {
                user_id: UserId::new(),
                email: event.email,
                full_name: event.full_name,
                age: event.age,
                sex: event.sex,
            }));

        let Json(res) = register_user(
            State(registry(user_repo, MockTicketRepository::new())),
            Json(create_request("alice@example.com")),
        )
        .await
        .unwrap();
        assert_eq!(res.email, "alice@example.com");
        assert!(res.tickets.is_empty());
    }

    #[tokio::test]
    async fn register_user_rejects_malformed_email() {
        let res = register_user(
            State(registry(
                MockUserRepository::new(),
                MockTicketRepository::new(),
            )),
            Json(create_request("not-an-email")),
        )
        .await;
        assert!(matches!(res, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn show_user_translates_absence_into_not_found() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(|_| Ok(None));

        let res = show_user(
            Path(UserId::new()),
            State(registry(user_repo, MockTicketRepository::new())),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn show_user_list_composes_owned_tickets() {
        let alice = sample_user("alice@example.com");
        let alice_id = alice.user_id;
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_all()
            .returning(move |_| Ok(vec![alice.clone()]));
        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo
            .expect_find_all_by_owner()
            .returning(|owner_id| {
                Ok(vec![
                    sample_ticket(owner_id, "12A"),
                    sample_ticket(owner_id, "12B"),
                ])
            });

        let Json(res) = show_user_list(
            Query(UserListQuery {
                limit: 100,
                offset: 0,
            }),
            State(registry(user_repo, ticket_repo)),
        )
        .await
        .unwrap();
        assert_eq!(res.items.len(), 1);
        assert_eq!(res.items[0].user_id, alice_id);
        assert_eq!(res.items[0].tickets.len(), 2);
    }

    #[tokio::test]
    async fn show_user_list_on_empty_store_is_empty_not_an_error() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_all().returning(|_| Ok(vec![]));

        let Json(res) = show_user_list(
            Query(UserListQuery {
                limit: 100,
                offset: 0,
            }),
            State(registry(user_repo, MockTicketRepository::new())),
        )
        .await
        .unwrap();
        assert!(res.items.is_empty());
    }

    #[tokio::test]
    async fn delete_user_checks_existence_before_deleting() {
        let user_id = UserId::new();
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(User {
                user_id: id,
                email: "alice@example.com".into(),
                full_name: None,
                age: None,
                sex: None,
            })));
        user_repo
            .expect_delete()
            .withf(move |event| event.user_id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let Json(res) = delete_user(
            Path(user_id),
            State(registry(user_repo, MockTicketRepository::new())),
        )
        .await
        .unwrap();
        assert_eq!(res.user_id, user_id);
    }

    #[tokio::test]
    async fn delete_user_returns_not_found_for_unknown_id() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(|_| Ok(None));
        user_repo.expect_delete().never();

        let res = delete_user(
            Path(UserId::new()),
            State(registry(user_repo, MockTicketRepository::new())),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }
}
