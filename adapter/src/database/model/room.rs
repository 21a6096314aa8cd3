use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ResourceId, RoomId, RoomResourceId, SiteId},
    room::Room,
};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRow {
    pub id: RoomId,
    pub name: String,
    pub site_id: SiteId,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for RoomRow {
    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            name,
            site_id,
            capacity,
            created_at,
            updated_at,
        } = value;
        Room {
            room_id: id,
            name,
            site_id,
            capacity,
            created_at,
            updated_at,
        }
    }
}

// 部屋と備品の中間テーブルに相当する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResourceRow {
    pub id: RoomResourceId,
    pub room_id: RoomId,
    pub resource_id: ResourceId,
    pub quantity: i32,
}

impl Record for RoomResourceRow {
    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}
