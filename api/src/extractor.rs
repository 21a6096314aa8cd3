use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{auth::AccessToken, id::UserId, user::User};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// リクエストヘッダのトークンからログイン中のユーザーを引き当てる
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::ForbiddenOperation("Not enough permissions".into()))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthorizedError)?;
        let access_token = AccessToken(bearer.token().to_string());

        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthorizedError)?;

        // トークンが残っていてもユーザーが削除済みなら認証失敗とする
        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await?
            .ok_or(AppError::UnauthorizedError)?;

        Ok(Self { access_token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::role::Role;

    fn user_with(role: Role) -> AuthorizedUser {
        AuthorizedUser {
            access_token: AccessToken("token".into()),
            user: User {
                user_id: UserId::new(5),
                name: "Carla".into(),
                email: "carla@example.com".into(),
                role,
            },
        }
    }

    #[test]
    fn admin_passes_the_admin_gate() {
        let admin = user_with(Role::Admin);
        assert!(admin.is_admin());
        assert!(admin.require_admin().is_ok());
        assert_eq!(admin.id(), UserId::new(5));
    }

    #[test]
    fn regular_user_is_forbidden() {
        let err = user_with(Role::User).require_admin().unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Not enough permissions");
    }
}
