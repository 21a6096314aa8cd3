use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{id::UserId, role::Role, user::event::DeleteUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::user::{
        CreateUserRequest, CreateUserRequestWithRole, UpdateUserRoleRequest,
        UpdateUserRoleRequestWithUserId, UserResponse, UsersResponse,
    },
};

// 新規登録は常に一般ユーザーとして作成する
pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;

    let event = CreateUserRequestWithRole::new(req, Role::User);
    registry
        .user_repository()
        .create(event.into())
        .await
        .map(|user| (StatusCode::CREATED, Json(user.into())))
}

// 管理者は role を指定してユーザーを作成できる
pub async fn create_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    user.require_admin()?;
    req.validate(&())?;

    let role = req.role.map(Role::from).unwrap_or_default();
    let event = CreateUserRequestWithRole::new(req, role);
    registry
        .user_repository()
        .create(event.into())
        .await
        .map(|user| (StatusCode::CREATED, Json(user.into())))
}

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.user))
}

pub async fn list_users(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    user.require_admin()?;

    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn change_role(
    user: AuthorizedUser,
    WithRejection(Path(user_id), _): WithRejection<Path<UserId>, AppError>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    user.require_admin()?;

    registry
        .user_repository()
        .update_role(UpdateUserRoleRequestWithUserId::new(user_id, req).into())
        .await
        .map(UserResponse::from)
        .map(Json)
}

pub async fn delete_user(
    user: AuthorizedUser,
    WithRejection(Path(user_id), _): WithRejection<Path<UserId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_admin()?;

    registry
        .user_repository()
        .delete(DeleteUser::new(user_id))
        .await
        .map(|_| StatusCode::OK)
}
