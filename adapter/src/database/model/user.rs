use kernel::model::{id::UserId, user::User};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            email,
            full_name,
            age,
            sex,
        } = value;
        User {
            user_id,
            email,
            full_name,
            age,
            sex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_row_converts_without_exposing_credentials() {
        let user_id = UserId::new();
        let row = UserRow {
            user_id,
            email: "alice@example.com".into(),
            full_name: Some("Alice Example".into()),
            age: Some(30),
            sex: None,
        };
        let user = User::from(row);
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.full_name.as_deref(), Some("Alice Example"));
        assert_eq!(user.age, Some(30));
        assert_eq!(user.sex, None);
    }
}
