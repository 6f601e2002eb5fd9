pub mod health;
pub mod ticket;
pub mod user;
pub mod v1;
