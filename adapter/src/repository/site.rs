use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::SiteId,
    site::{
        event::{CreateSite, DeleteSite, UpdateSite},
        Site,
    },
};
use kernel::repository::site::SiteRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{next_id, site::SiteRow},
    JsonStore,
};

#[derive(new)]
pub struct SiteRepositoryImpl {
    db: JsonStore,
}

#[async_trait]
impl SiteRepository for SiteRepositoryImpl {
    async fn create(&self, event: CreateSite) -> AppResult<Site> {
        self.db
            .transaction(move |doc| {
                let now = Utc::now();
                let row = SiteRow {
                    id: SiteId::new(next_id(&doc.sites)),
                    name: event.name,
                    city: event.city,
                    address: event.address,
                    created_at: now,
                    updated_at: now,
                };
                doc.sites.push(row.clone());
                Ok(Site::from(row))
            })
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<Site>> {
        let document = self.db.read().await?;
        Ok(document.sites.into_iter().map(Site::from).collect())
    }

    async fn find_by_id(&self, site_id: SiteId) -> AppResult<Option<Site>> {
        let document = self.db.read().await?;
        Ok(document
            .sites
            .into_iter()
            .find(|s| s.id == site_id)
            .map(Site::from))
    }

    async fn update(&self, event: UpdateSite) -> AppResult<Site> {
        self.db
            .transaction(move |doc| {
                let site = doc
                    .sites
                    .iter_mut()
                    .find(|s| s.id == event.site_id)
                    .ok_or_else(|| AppError::EntityNotFound("Site not found".into()))?;
                site.name = event.name;
                site.city = event.city;
                site.address = event.address;
                site.updated_at = Utc::now();
                Ok(Site::from(site.clone()))
            })
            .await
    }

    async fn delete(&self, event: DeleteSite) -> AppResult<()> {
        self.db
            .transaction(move |doc| {
                if !doc.sites.iter().any(|s| s.id == event.site_id) {
                    return Err(AppError::EntityNotFound("Site not found".into()));
                }
                if doc.rooms.iter().any(|r| r.site_id == event.site_id) {
                    return Err(AppError::UnprocessableEntity(
                        "Site still has rooms".into(),
                    ));
                }
                doc.sites.retain(|s| s.id != event.site_id);
                Ok(())
            })
            .await
    }
}
