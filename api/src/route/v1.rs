use super::{
    health::build_health_check_routers, ticket::build_ticket_routers, user::build_user_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_user_routers())
        .merge(build_ticket_routers());
    Router::new().nest("/api/v1", router)
}
