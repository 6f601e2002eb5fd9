use crate::model::ticket::TicketResponse;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    list::ListOptions,
    ticket::Ticket,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(skip)]
    pub full_name: Option<String>,
    #[garde(skip)]
    pub age: Option<i32>,
    #[garde(skip)]
    pub sex: Option<String>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            email,
            password,
            full_name,
            age,
            sex,
        } = value;
        Self {
            email,
            password,
            full_name,
            age,
            sex,
        }
    }
}

const DEFAULT_LIMIT: i64 = 100;
const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
}

impl From<UserListQuery> for ListOptions {
    fn from(value: UserListQuery) -> Self {
        let UserListQuery { limit, offset } = value;
        Self { limit, offset }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub tickets: Vec<TicketResponse>,
}

impl UserResponse {
    pub fn from_user_with_tickets(user: User, tickets: Vec<Ticket>) -> Self {
        let User {
            user_id,
            email,
            full_name,
            age,
            sex,
        } = user;
        Self {
            user_id,
            email,
            full_name,
            age,
            sex,
            tickets: tickets.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

/// Confirmation descriptor returned by the delete endpoint.
#[derive(Debug, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub user_id: UserId,
}
