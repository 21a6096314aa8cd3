use std::sync::Arc;

use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, reservation::ReservationRepositoryImpl,
    resource::ResourceRepositoryImpl, room::RoomRepositoryImpl, site::SiteRepositoryImpl,
    user::UserRepositoryImpl,
};
use adapter::{database::JsonStore, repository::health::HealthCheckRepositoryImpl};
use kernel::repository::{
    auth::AuthRepository, health::HealthCheckRepository, reservation::ReservationRepository,
    resource::ResourceRepository, room::RoomRepository, site::SiteRepository,
    user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    site_repository: Arc<dyn SiteRepository>,
    room_repository: Arc<dyn RoomRepository>,
    resource_repository: Arc<dyn ResourceRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
}

impl AppRegistry {
    pub fn new(db: JsonStore, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(db.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            db.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(
            db.clone(),
            app_config.auth.hash_cost,
        ));
        let site_repository = Arc::new(SiteRepositoryImpl::new(db.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(db.clone()));
        let resource_repository = Arc::new(ResourceRepositoryImpl::new(db.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(db.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            site_repository,
            room_repository,
            resource_repository,
            reservation_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn site_repository(&self) -> Arc<dyn SiteRepository> {
        self.site_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn resource_repository(&self) -> Arc<dyn ResourceRepository> {
        self.resource_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }
}
