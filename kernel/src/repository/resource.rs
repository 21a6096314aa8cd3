use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::resource::{
    event::{CreateResource, DeleteResource},
    Resource,
};

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create(&self, event: CreateResource) -> AppResult<Resource>;
    async fn find_all(&self) -> AppResult<Vec<Resource>>;
    async fn delete(&self, event: DeleteResource) -> AppResult<()>;
}
