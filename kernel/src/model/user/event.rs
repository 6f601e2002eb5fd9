use crate::model::id::UserId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
}

#[derive(Debug, new)]
pub struct DeleteUser {
    pub user_id: UserId,
}
