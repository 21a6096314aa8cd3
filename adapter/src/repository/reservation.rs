use crate::database::{
    model::{
        next_id,
        reservation::{into_reservations, ReservationRow},
    },
    JsonStore,
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use derive_new::new;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{
        event::{CancelReservation, CreateReservation},
        validation::validate_reservation,
        Reservation, ReservationStatus,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: JsonStore,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let room_id = event.room_id;
        let result = self
            .db
            .transaction(move |doc| {
                // 検証と登録を同じロックの中で行い、二重予約を防ぐ
                let room_exists = doc.rooms.iter().any(|r| r.id == event.room_id);
                let same_slot = into_reservations(
                    doc.reservations
                        .iter()
                        .filter(|r| r.room_id == event.room_id && r.date == event.date)
                        .cloned(),
                )?;
                validate_reservation(&event, event.today(), room_exists, &same_slot)?;

                let now = Utc::now();
                let row = ReservationRow {
                    id: ReservationId::new(next_id(&doc.reservations)),
                    room_id: event.room_id,
                    user_id: event.reserved_by,
                    date: event.date,
                    start_time: event.start_time,
                    end_time: event.end_time,
                    status: ReservationStatus::Confirmed.as_ref().to_string(),
                    created_at: now,
                    updated_at: now,
                };
                doc.reservations.push(row.clone());
                Reservation::try_from(row)
            })
            .await;

        match &result {
            Ok(r) => tracing::info!(
                reservation_id = %r.reservation_id,
                room_id = %r.room_id,
                date = %r.date,
                "reservation confirmed"
            ),
            Err(e) => tracing::debug!(room_id = %room_id, error = %e, "reservation rejected"),
        }
        result
    }

    async fn cancel(&self, event: CancelReservation) -> AppResult<Reservation> {
        let reservation = self
            .db
            .transaction(move |doc| {
                let row = doc
                    .reservations
                    .iter_mut()
                    .find(|r| r.id == event.reservation_id)
                    .ok_or_else(|| AppError::EntityNotFound("Reservation not found".into()))?;

                if row.user_id != event.requested_user && !event.requested_by_admin {
                    return Err(AppError::ForbiddenOperation(
                        "Not authorized to cancel this reservation".into(),
                    ));
                }
                if row.status == ReservationStatus::Cancelled.as_ref() {
                    return Err(AppError::UnprocessableEntity(
                        "Reservation is already cancelled".into(),
                    ));
                }

                row.status = ReservationStatus::Cancelled.as_ref().to_string();
                row.updated_at = Utc::now();
                Reservation::try_from(row.clone())
            })
            .await?;

        tracing::info!(reservation_id = %reservation.reservation_id, "reservation cancelled");
        Ok(reservation)
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let document = self.db.read().await?;
        into_reservations(document.reservations)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let document = self.db.read().await?;
        document
            .reservations
            .into_iter()
            .find(|r| r.id == reservation_id)
            .map(Reservation::try_from)
            .transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        let document = self.db.read().await?;
        into_reservations(
            document
                .reservations
                .into_iter()
                .filter(|r| r.user_id == user_id),
        )
    }

    async fn find_by_room_id(&self, room_id: RoomId) -> AppResult<Vec<Reservation>> {
        let document = self.db.read().await?;
        if !document.rooms.iter().any(|r| r.id == room_id) {
            return Err(AppError::EntityNotFound("Room not found".into()));
        }
        into_reservations(
            document
                .reservations
                .into_iter()
                .filter(|r| r.room_id == room_id),
        )
    }

    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        let document = self.db.read().await?;
        into_reservations(document.reservations.into_iter().filter(|r| r.date == date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        database::test_support::open_temp_store,
        repository::{room::RoomRepositoryImpl, site::SiteRepositoryImpl},
    };
    use chrono::{Local, NaiveTime, TimeZone};
    use kernel::{
        model::{room::event::CreateRoom, site::event::CreateSite},
        repository::{room::RoomRepository, site::SiteRepository},
    };

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2031, 3, d).unwrap()
    }

    fn request(room_id: RoomId, user: i64, date: NaiveDate, start: u32) -> CreateReservation {
        CreateReservation::new(
            room_id,
            UserId::new(user),
            date,
            t(start),
            t(start + 1),
            Local.with_ymd_and_hms(2031, 3, 1, 8, 0, 0).unwrap(),
        )
    }

    async fn seed_room(store: &JsonStore) -> RoomId {
        let site = SiteRepositoryImpl::new(store.clone())
            .create(CreateSite {
                name: "Centro".into(),
                city: "Sevilla".into(),
                address: None,
            })
            .await
            .unwrap();
        RoomRepositoryImpl::new(store.clone())
            .create(CreateRoom {
                name: "Sala".into(),
                site_id: site.site_id,
                capacity: 4,
            })
            .await
            .unwrap()
            .room_id
    }

    #[tokio::test]
    async fn create_confirms_and_rejects_double_booking() -> anyhow::Result<()> {
        let (_dir, store) = open_temp_store().await;
        let room_id = seed_room(&store).await;
        let repo = ReservationRepositoryImpl::new(store.clone());

        let first = repo.create(request(room_id, 2, day(5), 10)).await?;
        assert_eq!(first.reservation_id, ReservationId::new(1));
        assert_eq!(first.status, ReservationStatus::Confirmed);

        let clash = repo.create(request(room_id, 3, day(5), 10)).await;
        assert!(matches!(clash, Err(AppError::Conflict(_))));

        let next_hour = repo.create(request(room_id, 3, day(5), 11)).await?;
        assert_eq!(next_hour.reservation_id, ReservationId::new(2));
        assert_eq!(store.read().await?.reservations.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unknown_room_and_past_date() -> anyhow::Result<()> {
        let (_dir, store) = open_temp_store().await;
        let room_id = seed_room(&store).await;
        let repo = ReservationRepositoryImpl::new(store.clone());

        let unknown = repo.create(request(RoomId::new(77), 2, day(5), 10)).await;
        assert!(matches!(unknown, Err(AppError::EntityNotFound(_))));

        let past = CreateReservation::new(
            room_id,
            UserId::new(2),
            NaiveDate::from_ymd_opt(2031, 2, 28).unwrap(),
            t(10),
            t(11),
            Local.with_ymd_and_hms(2031, 3, 1, 8, 0, 0).unwrap(),
        );
        assert!(matches!(repo.create(past).await, Err(AppError::BadRequest(_))));
        assert!(store.read().await?.reservations.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_slot_can_be_booked_again() -> anyhow::Result<()> {
        let (_dir, store) = open_temp_store().await;
        let room_id = seed_room(&store).await;
        let repo = ReservationRepositoryImpl::new(store);

        let booked = repo.create(request(room_id, 2, day(6), 9)).await?;
        let cancelled = repo
            .cancel(CancelReservation::new(booked.reservation_id, UserId::new(2), false))
            .await?;
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);

        let rebooked = repo.create(request(room_id, 3, day(6), 9)).await?;
        assert_eq!(rebooked.status, ReservationStatus::Confirmed);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_checks_ownership() -> anyhow::Result<()> {
        let (_dir, store) = open_temp_store().await;
        let room_id = seed_room(&store).await;
        let repo = ReservationRepositoryImpl::new(store);
        let booked = repo.create(request(room_id, 2, day(7), 14)).await?;

        let stranger = repo
            .cancel(CancelReservation::new(booked.reservation_id, UserId::new(3), false))
            .await;
        assert!(matches!(stranger, Err(AppError::ForbiddenOperation(_))));

        let by_admin = repo
            .cancel(CancelReservation::new(booked.reservation_id, UserId::new(1), true))
            .await?;
        assert_eq!(by_admin.status, ReservationStatus::Cancelled);

        let twice = repo
            .cancel(CancelReservation::new(booked.reservation_id, UserId::new(2), false))
            .await;
        assert!(matches!(twice, Err(AppError::UnprocessableEntity(_))));

        let missing = repo
            .cancel(CancelReservation::new(ReservationId::new(99), UserId::new(2), false))
            .await;
        assert!(matches!(missing, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn queries_by_user_room_and_date() -> anyhow::Result<()> {
        let (_dir, store) = open_temp_store().await;
        let room_id = seed_room(&store).await;
        let repo = ReservationRepositoryImpl::new(store);
        repo.create(request(room_id, 2, day(8), 9)).await?;
        repo.create(request(room_id, 3, day(8), 10)).await?;
        repo.create(request(room_id, 2, day(9), 9)).await?;

        assert_eq!(repo.find_all().await?.len(), 3);
        assert_eq!(repo.find_by_user_id(UserId::new(2)).await?.len(), 2);
        assert_eq!(repo.find_by_room_id(room_id).await?.len(), 3);
        assert_eq!(repo.find_by_date(day(8)).await?.len(), 2);
        assert!(repo.find_by_id(ReservationId::new(3)).await?.is_some());
        assert!(matches!(
            repo.find_by_room_id(RoomId::new(50)).await,
            Err(AppError::EntityNotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_requests_for_one_slot_book_once() -> anyhow::Result<()> {
        let (_dir, store) = open_temp_store().await;
        let room_id = seed_room(&store).await;
        let repo = std::sync::Arc::new(ReservationRepositoryImpl::new(store));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(request(room_id, 10 + i, day(10), 15)).await })
            })
            .collect();

        let mut confirmed = 0;
        for handle in handles {
            if handle.await?.is_ok() {
                confirmed += 1;
            }
        }
        assert_eq!(confirmed, 1);
        Ok(())
    }
}
