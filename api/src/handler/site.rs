use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{id::SiteId, site::event::DeleteSite};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::site::{CreateSiteRequest, SiteResponse, SitesResponse, UpdateSiteRequestWithId},
};

pub async fn register_site(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSiteRequest>,
) -> AppResult<(StatusCode, Json<SiteResponse>)> {
    user.require_admin()?;
    req.validate(&())?;

    registry
        .site_repository()
        .create(req.into())
        .await
        .map(|site| (StatusCode::CREATED, Json(site.into())))
}

pub async fn show_site_list(State(registry): State<AppRegistry>) -> AppResult<Json<SitesResponse>> {
    registry
        .site_repository()
        .find_all()
        .await
        .map(SitesResponse::from)
        .map(Json)
}

pub async fn show_site(
    WithRejection(Path(site_id), _): WithRejection<Path<SiteId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SiteResponse>> {
    registry
        .site_repository()
        .find_by_id(site_id)
        .await
        .and_then(|site| match site {
            Some(site) => Ok(Json(site.into())),
            None => Err(AppError::EntityNotFound("Site not found".into())),
        })
}

pub async fn update_site(
    user: AuthorizedUser,
    WithRejection(Path(site_id), _): WithRejection<Path<SiteId>, AppError>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSiteRequest>,
) -> AppResult<Json<SiteResponse>> {
    user.require_admin()?;
    req.validate(&())?;

    registry
        .site_repository()
        .update(UpdateSiteRequestWithId::new(site_id, req).into())
        .await
        .map(SiteResponse::from)
        .map(Json)
}

pub async fn delete_site(
    user: AuthorizedUser,
    WithRejection(Path(site_id), _): WithRejection<Path<SiteId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_admin()?;

    registry
        .site_repository()
        .delete(DeleteSite { site_id })
        .await
        .map(|_| StatusCode::OK)
}
