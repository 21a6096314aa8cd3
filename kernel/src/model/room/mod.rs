use crate::model::id::{ResourceId, RoomId, SiteId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: RoomId,
    pub name: String,
    pub site_id: SiteId,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 部屋に設置されている備品とその数量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomResource {
    pub resource_id: ResourceId,
    pub name: String,
    pub quantity: i32,
}

#[derive(Debug)]
pub struct RoomWithResources {
    pub room: Room,
    pub resources: Vec<RoomResource>,
}

#[derive(Debug, Default)]
pub struct RoomListOptions {
    pub site_id: Option<SiteId>,
}
