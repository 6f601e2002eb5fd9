use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::ticket::register_ticket;
use crate::handler::user::{delete_user, register_user, show_user, show_user_list};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", post(register_user))
        .route("/", get(show_user_list))
        .route("/:user_id", get(show_user))
        .route("/:user_id", delete(delete_user))
        .route("/:user_id/tickets", post(register_ticket));

    Router::new().nest("/users", users_routers)
}
