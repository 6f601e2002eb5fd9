use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    health::HealthCheckRepositoryImpl, ticket::TicketRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    health::HealthCheckRepository, ticket::TicketRepository, user::UserRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let ticket_repository = Arc::new(TicketRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            user_repository,
            ticket_repository,
        }
    }

    /// Wire the registry from prebuilt repositories. Handler tests use this
    /// to swap in mock implementations.
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            user_repository,
            ticket_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn ticket_repository(&self) -> Arc<dyn TicketRepository> {
        self.ticket_repository.clone()
    }
}
