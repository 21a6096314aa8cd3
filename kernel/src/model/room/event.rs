use crate::model::id::{ResourceId, RoomId, SiteId};
use derive_new::new;

pub struct CreateRoom {
    pub name: String,
    pub site_id: SiteId,
    pub capacity: i32,
}

#[derive(Debug)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub name: String,
    pub site_id: SiteId,
    pub capacity: i32,
}

#[derive(Debug)]
pub struct DeleteRoom {
    pub room_id: RoomId,
}

#[derive(new)]
pub struct AttachResource {
    pub room_id: RoomId,
    pub resource_id: ResourceId,
    pub quantity: i32,
}

#[derive(new)]
pub struct DetachResource {
    pub room_id: RoomId,
    pub resource_id: ResourceId,
}
