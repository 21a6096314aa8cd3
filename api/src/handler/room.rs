use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{
    id::{ResourceId, RoomId},
    room::event::{DeleteRoom, DetachResource},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::room::{
        AttachResourceRequest, AttachResourceRequestWithRoomId, CreateRoomRequest,
        RoomListQuery, RoomResourceResponse, RoomResourcesResponse, RoomResponse,
        RoomWithResourcesResponse, RoomsResponse, UpdateRoomRequestWithId,
    },
};

pub async fn register_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<RoomResponse>)> {
    user.require_admin()?;
    req.validate(&())?;

    registry
        .room_repository()
        .create(req.into())
        .await
        .map(|room| (StatusCode::CREATED, Json(room.into())))
}

pub async fn show_room_list(
    WithRejection(Query(query), _): WithRejection<Query<RoomListQuery>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    query.validate(&())?;

    registry
        .room_repository()
        .find_all(query.into())
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_room(
    WithRejection(Path(room_id), _): WithRejection<Path<RoomId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomWithResourcesResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound("Room not found".into())),
        })
}

pub async fn update_room(
    user: AuthorizedUser,
    WithRejection(Path(room_id), _): WithRejection<Path<RoomId>, AppError>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<Json<RoomResponse>> {
    user.require_admin()?;
    req.validate(&())?;

    registry
        .room_repository()
        .update(UpdateRoomRequestWithId::new(room_id, req).into())
        .await
        .map(RoomResponse::from)
        .map(Json)
}

pub async fn delete_room(
    user: AuthorizedUser,
    WithRejection(Path(room_id), _): WithRejection<Path<RoomId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_admin()?;

    registry
        .room_repository()
        .delete(DeleteRoom { room_id })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_room_resources(
    WithRejection(Path(room_id), _): WithRejection<Path<RoomId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResourcesResponse>> {
    registry
        .room_repository()
        .find_resources(room_id)
        .await
        .map(RoomResourcesResponse::from)
        .map(Json)
}

pub async fn attach_resource(
    user: AuthorizedUser,
    WithRejection(Path(room_id), _): WithRejection<Path<RoomId>, AppError>,
    State(registry): State<AppRegistry>,
    Json(req): Json<AttachResourceRequest>,
) -> AppResult<(StatusCode, Json<RoomResourceResponse>)> {
    user.require_admin()?;
    req.validate(&())?;

    registry
        .room_repository()
        .attach_resource(AttachResourceRequestWithRoomId::new(room_id, req).into())
        .await
        .map(|link| (StatusCode::CREATED, Json(link.into())))
}

pub async fn detach_resource(
    user: AuthorizedUser,
    WithRejection(Path((room_id, resource_id)), _): WithRejection<
        Path<(RoomId, ResourceId)>,
        AppError,
    >,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_admin()?;

    registry
        .room_repository()
        .detach_resource(DetachResource::new(room_id, resource_id))
        .await
        .map(|_| StatusCode::OK)
}
