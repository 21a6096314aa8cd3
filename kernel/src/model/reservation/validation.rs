//! Acceptance rules for a new reservation.
//!
//! A reservation is accepted when its room exists, its date is today or
//! later, it lasts exactly one hour and its `[start, end)` interval does not
//! intersect any non-cancelled reservation of the same room on the same day.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use shared::error::AppError;
use thiserror::Error;

use super::{event::CreateReservation, Reservation};
use crate::model::id::ReservationId;

pub const RESERVATION_MINUTES: i64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReservationRejection {
    #[error("Room not found")]
    RoomNotFound,
    #[error("Cannot make reservations for past dates")]
    PastDate,
    #[error("Start time must be before end time")]
    StartNotBeforeEnd,
    #[error("Reservations must be exactly 1 hour long")]
    InvalidDuration,
    #[error("Time slot already booked")]
    SlotTaken { conflicting: ReservationId },
}

impl From<ReservationRejection> for AppError {
    fn from(value: ReservationRejection) -> Self {
        match value {
            ReservationRejection::RoomNotFound => AppError::EntityNotFound(value.to_string()),
            ReservationRejection::SlotTaken { .. } => AppError::Conflict(value.to_string()),
            _ => AppError::BadRequest(value.to_string()),
        }
    }
}

/// Half-open interval intersection: touching endpoints do not overlap.
pub fn overlaps(start: NaiveTime, end: NaiveTime, other_start: NaiveTime, other_end: NaiveTime) -> bool {
    start < other_end && end > other_start
}

/// Checks `candidate` against the reservations already held. The first
/// failing rule wins, in the order the rules are listed in the module docs.
pub fn validate_reservation<'a, I>(
    candidate: &CreateReservation,
    today: NaiveDate,
    room_exists: bool,
    existing: I,
) -> Result<(), ReservationRejection>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    if !room_exists {
        return Err(ReservationRejection::RoomNotFound);
    }
    if candidate.date < today {
        return Err(ReservationRejection::PastDate);
    }
    if candidate.start_time >= candidate.end_time {
        return Err(ReservationRejection::StartNotBeforeEnd);
    }
    // 秒未満の端数も含めてちょうど 1 時間であること
    if candidate.end_time - candidate.start_time != TimeDelta::minutes(RESERVATION_MINUTES) {
        return Err(ReservationRejection::InvalidDuration);
    }

    let conflict = existing.into_iter().find(|r| {
        r.room_id == candidate.room_id
            && r.date == candidate.date
            && r.status.holds_slot()
            && overlaps(candidate.start_time, candidate.end_time, r.start_time, r.end_time)
    });
    match conflict {
        Some(r) => Err(ReservationRejection::SlotTaken {
            conflicting: r.reservation_id,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        id::{RoomId, UserId},
        reservation::ReservationStatus,
    };
    use chrono::{Local, TimeZone, Utc};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 5, d).unwrap()
    }

    fn candidate(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> CreateReservation {
        CreateReservation::new(
            RoomId::new(1),
            UserId::new(7),
            date,
            start,
            end,
            Local.with_ymd_and_hms(2030, 5, 10, 9, 0, 0).unwrap(),
        )
    }

    fn existing(id: i64, room: i64, date: NaiveDate, start: NaiveTime, end: NaiveTime, status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(id),
            room_id: RoomId::new(room),
            reserved_by: UserId::new(2),
            date,
            start_time: start,
            end_time: end,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn accepts_free_one_hour_slot() {
        let c = candidate(day(10), t(10, 0), t(11, 0));
        assert_eq!(validate_reservation(&c, day(10), true, []), Ok(()));
    }

    #[test]
    fn missing_room_is_checked_first() {
        let c = candidate(day(1), t(11, 0), t(10, 0));
        assert_eq!(
            validate_reservation(&c, day(10), false, []),
            Err(ReservationRejection::RoomNotFound)
        );
    }

    #[test]
    fn rejects_past_dates() {
        let c = candidate(day(9), t(10, 0), t(11, 0));
        assert_eq!(
            validate_reservation(&c, day(10), true, []),
            Err(ReservationRejection::PastDate)
        );
    }

    #[test]
    fn rejects_inverted_and_wrong_length_slots() {
        let inverted = candidate(day(10), t(11, 0), t(10, 0));
        assert_eq!(
            validate_reservation(&inverted, day(10), true, []),
            Err(ReservationRejection::StartNotBeforeEnd)
        );
        let equal = candidate(day(10), t(10, 0), t(10, 0));
        assert_eq!(
            validate_reservation(&equal, day(10), true, []),
            Err(ReservationRejection::StartNotBeforeEnd)
        );
        let long = candidate(day(10), t(10, 0), t(11, 30));
        assert_eq!(
            validate_reservation(&long, day(10), true, []),
            Err(ReservationRejection::InvalidDuration)
        );
        let short = candidate(day(10), t(10, 0), t(10, 45));
        assert_eq!(
            validate_reservation(&short, day(10), true, []),
            Err(ReservationRejection::InvalidDuration)
        );
    }

    #[test]
    fn rejects_fractional_second_overrun() {
        let end = NaiveTime::from_hms_milli_opt(11, 0, 0, 500).unwrap();
        let c = candidate(day(10), t(10, 0), end);
        assert_eq!(
            validate_reservation(&c, day(10), true, []),
            Err(ReservationRejection::InvalidDuration)
        );
        let seconds_short = candidate(day(10), t(10, 0), NaiveTime::from_hms_opt(10, 59, 59).unwrap());
        assert_eq!(
            validate_reservation(&seconds_short, day(10), true, []),
            Err(ReservationRejection::InvalidDuration)
        );
    }

    #[test]
    fn rejects_overlap_on_same_room_and_date() {
        let booked = [existing(3, 1, day(12), t(10, 0), t(11, 0), ReservationStatus::Confirmed)];
        let c = candidate(day(12), t(10, 30), t(11, 30));
        assert_eq!(
            validate_reservation(&c, day(10), true, &booked),
            Err(ReservationRejection::SlotTaken {
                conflicting: ReservationId::new(3)
            })
        );
    }

    #[test]
    fn adjacent_slots_do_not_conflict() {
        let booked = [existing(3, 1, day(12), t(10, 0), t(11, 0), ReservationStatus::Confirmed)];
        let after = candidate(day(12), t(11, 0), t(12, 0));
        let before = candidate(day(12), t(9, 0), t(10, 0));
        assert_eq!(validate_reservation(&after, day(10), true, &booked), Ok(()));
        assert_eq!(validate_reservation(&before, day(10), true, &booked), Ok(()));
    }

    #[test]
    fn ignores_cancelled_other_rooms_and_other_dates() {
        let booked = [
            existing(1, 1, day(12), t(10, 0), t(11, 0), ReservationStatus::Cancelled),
            existing(2, 2, day(12), t(10, 0), t(11, 0), ReservationStatus::Confirmed),
            existing(3, 1, day(13), t(10, 0), t(11, 0), ReservationStatus::Pending),
        ];
        let c = candidate(day(12), t(10, 0), t(11, 0));
        assert_eq!(validate_reservation(&c, day(10), true, &booked), Ok(()));
    }

    #[test]
    fn pending_reservations_hold_their_slot() {
        let booked = [existing(5, 1, day(12), t(10, 0), t(11, 0), ReservationStatus::Pending)];
        let c = candidate(day(12), t(10, 0), t(11, 0));
        assert!(validate_reservation(&c, day(10), true, &booked).is_err());
    }

    #[test]
    fn rejection_maps_to_http_errors() {
        assert!(matches!(
            AppError::from(ReservationRejection::RoomNotFound),
            AppError::EntityNotFound(_)
        ));
        assert!(matches!(
            AppError::from(ReservationRejection::SlotTaken {
                conflicting: ReservationId::new(1)
            }),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(ReservationRejection::PastDate),
            AppError::BadRequest(_)
        ));
    }
}
