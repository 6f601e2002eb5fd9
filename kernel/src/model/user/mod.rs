use crate::model::id::UserId;

pub mod event;

/// Public view of a registered user. The credential token stays inside the
/// adapter and never appears on this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
}
