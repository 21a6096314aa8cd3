use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{RoomId, RoomResourceId, SiteId},
    room::{
        event::{AttachResource, CreateRoom, DeleteRoom, DetachResource, UpdateRoom},
        Room, RoomListOptions, RoomResource, RoomWithResources,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{
        next_id,
        room::{RoomResourceRow, RoomRow},
        Document,
    },
    JsonStore,
};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: JsonStore,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let room = self
            .db
            .transaction(move |doc| {
                ensure_site_exists(doc, event.site_id)?;
                let now = Utc::now();
                let row = RoomRow {
                    id: RoomId::new(next_id(&doc.rooms)),
                    name: event.name,
                    site_id: event.site_id,
                    capacity: event.capacity,
                    created_at: now,
                    updated_at: now,
                };
                doc.rooms.push(row.clone());
                Ok(Room::from(row))
            })
            .await?;
        tracing::info!(room_id = %room.room_id, site_id = %room.site_id, "created a room");
        Ok(room)
    }

    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>> {
        let document = self.db.read().await?;
        Ok(document
            .rooms
            .into_iter()
            .filter(|r| options.site_id.map_or(true, |site_id| r.site_id == site_id))
            .map(Room::from)
            .collect())
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<RoomWithResources>> {
        let document = self.db.read().await?;
        let resources = resources_of(&document, room_id);
        Ok(document
            .rooms
            .into_iter()
            .find(|r| r.id == room_id)
            .map(|row| RoomWithResources {
                room: row.into(),
                resources,
            }))
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        self.db
            .transaction(move |doc| {
                ensure_site_exists(doc, event.site_id)?;
                let room = doc
                    .rooms
                    .iter_mut()
                    .find(|r| r.id == event.room_id)
                    .ok_or_else(room_not_found)?;
                room.name = event.name;
                room.site_id = event.site_id;
                room.capacity = event.capacity;
                room.updated_at = Utc::now();
                Ok(Room::from(room.clone()))
            })
            .await
    }

    async fn delete(&self, event: DeleteRoom) -> AppResult<()> {
        self.db
            .transaction(move |doc| {
                let before = doc.rooms.len();
                doc.rooms.retain(|r| r.id != event.room_id);
                if doc.rooms.len() == before {
                    return Err(room_not_found());
                }
                doc.room_resources.retain(|l| l.room_id != event.room_id);
                Ok(())
            })
            .await
    }

    async fn find_resources(&self, room_id: RoomId) -> AppResult<Vec<RoomResource>> {
        let document = self.db.read().await?;
        if !document.rooms.iter().any(|r| r.id == room_id) {
            return Err(room_not_found());
        }
        Ok(resources_of(&document, room_id))
    }

    async fn attach_resource(&self, event: AttachResource) -> AppResult<RoomResource> {
        self.db
            .transaction(move |doc| {
                if !doc.rooms.iter().any(|r| r.id == event.room_id) {
                    return Err(room_not_found());
                }
                let name = doc
                    .resources
                    .iter()
                    .find(|r| r.id == event.resource_id)
                    .map(|r| r.name.clone())
                    .ok_or_else(|| AppError::EntityNotFound("Resource not found".into()))?;

                let existing = doc
                    .room_resources
                    .iter_mut()
                    .find(|l| l.room_id == event.room_id && l.resource_id == event.resource_id);
                match existing {
                    Some(link) => link.quantity = event.quantity,
                    None => {
                        let id = RoomResourceId::new(next_id(&doc.room_resources));
                        doc.room_resources.push(RoomResourceRow {
                            id,
                            room_id: event.room_id,
                            resource_id: event.resource_id,
                            quantity: event.quantity,
                        });
                    }
                }
                Ok(RoomResource {
                    resource_id: event.resource_id,
                    name,
                    quantity: event.quantity,
                })
            })
            .await
    }

    async fn detach_resource(&self, event: DetachResource) -> AppResult<()> {
        self.db
            .transaction(move |doc| {
                let before = doc.room_resources.len();
                doc.room_resources.retain(|l| {
                    !(l.room_id == event.room_id && l.resource_id == event.resource_id)
                });
                if doc.room_resources.len() == before {
                    return Err(AppError::EntityNotFound(
                        "Resource is not attached to this room".into(),
                    ));
                }
                Ok(())
            })
            .await
    }
}

fn room_not_found() -> AppError {
    AppError::EntityNotFound("Room not found".into())
}

fn ensure_site_exists(doc: &Document, site_id: SiteId) -> AppResult<()> {
    if doc.sites.iter().any(|s| s.id == site_id) {
        Ok(())
    } else {
        Err(AppError::EntityNotFound("Site not found".into()))
    }
}

// 備品名はリンクに持たせず、備品コレクションから引く
fn resources_of(doc: &Document, room_id: RoomId) -> Vec<RoomResource> {
    doc.room_resources
        .iter()
        .filter(|l| l.room_id == room_id)
        .filter_map(|l| {
            doc.resources
                .iter()
                .find(|r| r.id == l.resource_id)
                .map(|r| RoomResource {
                    resource_id: r.id,
                    name: r.name.clone(),
                    quantity: l.quantity,
                })
        })
        .collect()
}
