use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ResourceId,
    resource::{
        event::{CreateResource, DeleteResource},
        Resource,
    },
};
use kernel::repository::resource::ResourceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{next_id, resource::ResourceRow},
    JsonStore,
};

#[derive(new)]
pub struct ResourceRepositoryImpl {
    db: JsonStore,
}

#[async_trait]
impl ResourceRepository for ResourceRepositoryImpl {
    async fn create(&self, event: CreateResource) -> AppResult<Resource> {
        self.db
            .transaction(move |doc| {
                let row = ResourceRow {
                    id: ResourceId::new(next_id(&doc.resources)),
                    name: event.name,
                    description: event.description,
                };
                doc.resources.push(row.clone());
                Ok(Resource::from(row))
            })
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<Resource>> {
        let document = self.db.read().await?;
        Ok(document.resources.into_iter().map(Resource::from).collect())
    }

    // 部屋側のリンクも合わせて外す
    async fn delete(&self, event: DeleteResource) -> AppResult<()> {
        self.db
            .transaction(move |doc| {
                let before = doc.resources.len();
                doc.resources.retain(|r| r.id != event.resource_id);
                if doc.resources.len() == before {
                    return Err(AppError::EntityNotFound("Resource not found".into()));
                }
                doc.room_resources
                    .retain(|l| l.resource_id != event.resource_id);
                Ok(())
            })
            .await
    }
}
