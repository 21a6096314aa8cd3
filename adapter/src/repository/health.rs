use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::database::JsonStore;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    db: JsonStore,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_db(&self) -> bool {
        self.db.ping().await
    }
}
