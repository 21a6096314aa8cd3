use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RoomId,
    room::{
        event::{AttachResource, CreateRoom, DeleteRoom, DetachResource, UpdateRoom},
        Room, RoomListOptions, RoomResource, RoomWithResources,
    },
};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<RoomWithResources>>;
    async fn update(&self, event: UpdateRoom) -> AppResult<Room>;
    // 部屋に紐づく備品のリンクも一緒に削除する
    async fn delete(&self, event: DeleteRoom) -> AppResult<()>;
    async fn find_resources(&self, room_id: RoomId) -> AppResult<Vec<RoomResource>>;
    // 既に同じ備品が紐づいている場合は数量を上書きする
    async fn attach_resource(&self, event: AttachResource) -> AppResult<RoomResource>;
    async fn detach_resource(&self, event: DetachResource) -> AppResult<()>;
}
