use crate::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{
        event::{CancelReservation, CreateReservation},
        Reservation,
    },
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 予約の検証と登録を行う
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    // 予約をキャンセル状態にする。予約者本人か管理者のみ可能
    async fn cancel(&self, event: CancelReservation) -> AppResult<Reservation>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;
    // 部屋が存在しない場合は EntityNotFound を返す
    async fn find_by_room_id(&self, room_id: RoomId) -> AppResult<Vec<Reservation>>;
    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<Reservation>>;
}
