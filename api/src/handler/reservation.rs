use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::{Local, NaiveDate};
use kernel::model::{
    id::{ReservationId, RoomId},
    reservation::event::{CancelReservation, CreateReservation},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::reservation::{CreateReservationRequest, ReservationResponse, ReservationsResponse},
};

pub async fn reserve_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    let CreateReservationRequest {
        room_id,
        date,
        start_time,
        end_time,
    } = req;
    let event = CreateReservation::new(
        room_id,
        user.id(),
        date,
        start_time,
        end_time,
        Local::now(),
    );

    registry
        .reservation_repository()
        .create(event)
        .await
        .map(|r| (StatusCode::CREATED, Json(r.into())))
}

pub async fn cancel_reservation(
    user: AuthorizedUser,
    WithRejection(Path(reservation_id), _): WithRejection<Path<ReservationId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let event = CancelReservation::new(reservation_id, user.id(), user.is_admin());
    registry
        .reservation_repository()
        .cancel(event)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn show_reservation_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    user.require_admin()?;

    registry
        .reservation_repository()
        .find_all()
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_my_reservations(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_user_id(user.id())
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_room_reservations(
    _user: AuthorizedUser,
    WithRejection(Path(room_id), _): WithRejection<Path<RoomId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_room_id(room_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservations_on_date(
    _user: AuthorizedUser,
    WithRejection(Path(date), _): WithRejection<Path<NaiveDate>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_date(date)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}
