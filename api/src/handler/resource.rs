use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{id::ResourceId, resource::event::DeleteResource};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::resource::{CreateResourceRequest, ResourceResponse, ResourcesResponse},
};

pub async fn register_resource(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateResourceRequest>,
) -> AppResult<(StatusCode, Json<ResourceResponse>)> {
    user.require_admin()?;
    req.validate(&())?;

    registry
        .resource_repository()
        .create(req.into())
        .await
        .map(|resource| (StatusCode::CREATED, Json(resource.into())))
}

pub async fn show_resource_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ResourcesResponse>> {
    registry
        .resource_repository()
        .find_all()
        .await
        .map(ResourcesResponse::from)
        .map(Json)
}

pub async fn delete_resource(
    user: AuthorizedUser,
    WithRejection(Path(resource_id), _): WithRejection<Path<ResourceId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_admin()?;

    registry
        .resource_repository()
        .delete(DeleteResource { resource_id })
        .await
        .map(|_| StatusCode::OK)
}
