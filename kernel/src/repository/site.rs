use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::SiteId,
    site::{
        event::{CreateSite, DeleteSite, UpdateSite},
        Site,
    },
};

#[async_trait]
pub trait SiteRepository: Send + Sync {
    async fn create(&self, event: CreateSite) -> AppResult<Site>;
    async fn find_all(&self) -> AppResult<Vec<Site>>;
    async fn find_by_id(&self, site_id: SiteId) -> AppResult<Option<Site>>;
    async fn update(&self, event: UpdateSite) -> AppResult<Site>;
    // 部屋が紐づいているサイトは削除できない
    async fn delete(&self, event: DeleteSite) -> AppResult<()>;
}
