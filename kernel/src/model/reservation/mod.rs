use crate::model::id::{ReservationId, RoomId, UserId};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use strum::{AsRefStr, EnumString};

pub mod event;
pub mod validation;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    // キャンセル済みの予約は時間帯を占有しない
    pub fn holds_slot(self) -> bool {
        self != Self::Cancelled
    }
}

#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub room_id: RoomId,
    pub reserved_by: UserId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
