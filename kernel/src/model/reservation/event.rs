use crate::model::id::{ReservationId, RoomId, UserId};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use derive_new::new;

#[derive(new)]
pub struct CreateReservation {
    pub room_id: RoomId,
    pub reserved_by: UserId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    // 過去日判定の基準時刻
    pub requested_at: DateTime<Local>,
}

impl CreateReservation {
    pub fn today(&self) -> NaiveDate {
        self.requested_at.date_naive()
    }
}

#[derive(new)]
pub struct CancelReservation {
    pub reservation_id: ReservationId,
    pub requested_user: UserId,
    pub requested_by_admin: bool,
}
