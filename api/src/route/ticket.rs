use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::ticket::{
    delete_every_ticket, delete_ticket, show_every_ticket, show_ticket, show_ticket_list,
};

pub fn build_ticket_routers() -> Router<AppRegistry> {
    let tickets_routers = Router::new()
        .route("/", get(show_ticket_list))
        .route("/:user_id", get(show_ticket))
        .route("/:user_id/every-ticket", get(show_every_ticket))
        .route("/:user_id/delete-ticket", delete(delete_ticket))
        .route("/:user_id/delete-every-ticket", delete(delete_every_ticket));

    Router::new().nest("/tickets", tickets_routers)
}
