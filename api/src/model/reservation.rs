use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

// 時刻は "HH:MM" でも "HH:MM:SS" でも受け付ける
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub room_id: RoomId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
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

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            room_id,
            reserved_by,
            date,
            start_time,
            end_time,
            status,
            created_at,
            updated_at,
        } = value;
        Self {
            id: reservation_id,
            room_id,
            user_id: reserved_by,
            date,
            start_time,
            end_time,
            status: status_name(status),
            created_at,
            updated_at,
        }
    }
}

fn status_name(status: ReservationStatus) -> String {
    status.as_ref().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_times_without_seconds() {
        let req: CreateReservationRequest = serde_json::from_value(serde_json::json!({
            "room_id": 4,
            "date": "2030-01-15",
            "start_time": "09:00",
            "end_time": "10:00:00"
        }))
        .unwrap();
        assert_eq!(req.room_id, RoomId::new(4));
        assert_eq!(req.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(req.end_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn response_uses_status_names() {
        let now = Utc::now();
        let response = ReservationResponse::from(Reservation {
            reservation_id: ReservationId::new(1),
            room_id: RoomId::new(2),
            reserved_by: UserId::new(3),
            date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            status: ReservationStatus::Cancelled,
            created_at: now,
            updated_at: now,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "cancelled");
        assert_eq!(json["user_id"], 3);
        assert_eq!(json["date"], "2030-01-15");
    }
}
