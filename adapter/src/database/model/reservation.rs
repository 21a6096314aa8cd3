use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use std::str::FromStr;

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRow {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for ReservationRow {
    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> AppResult<Self> {
        let ReservationRow {
            id,
            room_id,
            user_id,
            date,
            start_time,
            end_time,
            status,
            created_at,
            updated_at,
        } = value;
        let status = ReservationStatus::from_str(&status).map_err(|e| {
            AppError::ConversionEntityError(format!("reservation {id} has status {status}: {e}"))
        })?;
        Ok(Reservation {
            reservation_id: id,
            room_id,
            reserved_by: user_id,
            date,
            start_time,
            end_time,
            status,
            created_at,
            updated_at,
        })
    }
}

// 予約一覧をドメインの型に変換する。壊れた行が一つでもあればエラー
pub fn into_reservations<I>(rows: I) -> AppResult<Vec<Reservation>>
where
    I: IntoIterator<Item = ReservationRow>,
{
    rows.into_iter().map(Reservation::try_from).collect()
}
