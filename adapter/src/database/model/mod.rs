use serde::{Deserialize, Serialize};

pub mod auth;
pub mod reservation;
pub mod resource;
pub mod room;
pub mod site;
pub mod user;

use reservation::ReservationRow;
use resource::ResourceRow;
use room::{RoomResourceRow, RoomRow};
use site::SiteRow;
use user::UserRow;

// 保存ファイルのトップレベル。存在しないコレクションは空として読む
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub users: Vec<UserRow>,
    pub sites: Vec<SiteRow>,
    pub rooms: Vec<RoomRow>,
    pub resources: Vec<ResourceRow>,
    pub room_resources: Vec<RoomResourceRow>,
    pub reservations: Vec<ReservationRow>,
}

pub trait Record {
    fn raw_id(&self) -> i64;
}

/// Next identifier of a collection: current maximum plus one.
pub fn next_id<T: Record>(items: &[T]) -> i64 {
    items.iter().map(Record::raw_id).max().unwrap_or(0) + 1
}
