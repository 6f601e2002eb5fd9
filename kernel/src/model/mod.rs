pub mod id;
pub mod list;
pub mod ticket;
pub mod user;
