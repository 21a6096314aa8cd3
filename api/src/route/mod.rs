pub mod auth;
pub mod health;
pub mod reservation;
pub mod resource;
pub mod room;
pub mod site;
pub mod user;

use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::welcome;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(welcome))
        .merge(health::build_health_check_routers())
        .merge(auth::build_auth_routers())
        .merge(user::build_user_routers())
        .merge(site::build_site_routers())
        .merge(room::build_room_routers())
        .merge(resource::build_resource_routers())
        .merge(reservation::build_reservation_routers())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use adapter::{database::JsonStore, redis::RedisClient};
    use axum::{
        body::{to_bytes, Body},
        extract::State,
        http::{header, Request, StatusCode},
        Json, Router,
    };
    use kernel::model::{auth::AccessToken, id::UserId, role::Role, user::User};
    use serde_json::Value;
    use shared::{
        config::{AppConfig, AuthConfig, DatabaseConfig, RedisConfig, ServerConfig},
        error::AppError,
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        extractor::AuthorizedUser, handler::site::register_site, model::site::CreateSiteRequest,
    };

    // Redis には接続しない経路だけを検証する
    async fn test_registry() -> anyhow::Result<(TempDir, AppRegistry)> {
        let dir = tempfile::tempdir()?;
        let app_config = AppConfig {
            database: DatabaseConfig {
                path: dir.path().join("database.json"),
                initial_admin_email: "admin@example.com".into(),
                initial_admin_password: "admin123".into(),
            },
            redis: RedisConfig {
                host: "localhost".into(),
                port: 6379,
            },
            auth: AuthConfig {
                ttl: 60,
                hash_cost: 4,
            },
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
        };
        let db = JsonStore::open(&app_config.database, app_config.auth.hash_cost).await?;
        let kv = Arc::new(RedisClient::new(&app_config.redis)?);
        Ok((dir, AppRegistry::new(db, kv, app_config)))
    }

    async fn test_app() -> anyhow::Result<(TempDir, Router)> {
        let (dir, registry) = test_registry().await?;
        Ok((dir, routes().with_state(registry)))
    }

    fn signed_in(role: Role) -> AuthorizedUser {
        AuthorizedUser {
            access_token: AccessToken("token".into()),
            user: User {
                user_id: UserId::new(2),
                name: "Dario".into(),
                email: "dario@example.com".into(),
                role,
            },
        }
    }

    async fn body_json(body: Body) -> anyhow::Result<Value> {
        let bytes = to_bytes(body, usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn get(uri: &str) -> anyhow::Result<Request<Body>> {
        Ok(Request::get(uri).body(Body::empty())?)
    }

    #[tokio::test]
    async fn root_returns_welcome_message() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        let res = app.oneshot(get("/")?).await?;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res.into_body()).await?;
        assert!(json["message"].as_str().is_some());
        Ok(())
    }

    #[tokio::test]
    async fn health_endpoints_report_ok() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        let res = app.clone().oneshot(get("/health")?).await?;
        assert_eq!(res.status(), StatusCode::OK);
        let res = app.oneshot(get("/health/db")?).await?;
        assert_eq!(res.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn room_list_starts_empty() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        let res = app.oneshot(get("/rooms?site_id=1")?).await?;
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res.into_body()).await?;
        assert_eq!(json["items"], serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn missing_site_is_not_found() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        let res = app.oneshot(get("/sites/99")?).await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json = body_json(res.into_body()).await?;
        assert_eq!(json["detail"], "Site not found");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_path_and_query_use_detail_body() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        for uri in ["/rooms/abc", "/sites/1.5", "/rooms?site_id=north", "/rooms/abc/resources"] {
            let res = app.clone().oneshot(get(uri)?).await?;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
            let json = body_json(res.into_body()).await?;
            assert!(json["detail"].as_str().is_some_and(|d| !d.is_empty()), "{uri}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn reservation_without_token_is_unauthorized() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        let req = Request::post("/reservations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"room_id":1,"date":"2030-01-15","start_time":"09:00","end_time":"10:00"}"#,
            ))?;
        let res = app.oneshot(req).await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).map(|v| v.as_bytes()),
            Some(&b"Bearer"[..])
        );
        let json = body_json(res.into_body()).await?;
        assert_eq!(json["detail"], "Could not validate credentials");
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        let register = || {
            Request::post("/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"Alice","email":"alice@example.com","password":"secret","role":"admin"}"#,
                ))
        };

        let res = app.clone().oneshot(register()?).await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        let json = body_json(res.into_body()).await?;
        assert_eq!(json["role"], "user");

        let res = app.oneshot(register()?).await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res.into_body()).await?;
        assert_eq!(json["detail"], "Email already registered");
        Ok(())
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() -> anyhow::Result<()> {
        let (_dir, app) = test_app().await?;
        let req = Request::post("/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("username=admin%40example.com&password=wrong"))?;
        let res = app.oneshot(req).await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(res.into_body()).await?;
        assert_eq!(json["detail"], "Incorrect email or password");
        Ok(())
    }

    #[tokio::test]
    async fn admin_gate_runs_before_body_validation() -> anyhow::Result<()> {
        let (_dir, registry) = test_registry().await?;
        let invalid = || CreateSiteRequest {
            name: String::new(),
            city: String::new(),
            address: None,
        };

        let res =
            register_site(signed_in(Role::User), State(registry.clone()), Json(invalid())).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));

        let res =
            register_site(signed_in(Role::Admin), State(registry.clone()), Json(invalid())).await;
        assert!(matches!(res, Err(AppError::ValidationError(_))));

        let created = register_site(
            signed_in(Role::Admin),
            State(registry),
            Json(CreateSiteRequest {
                name: "Sede Norte".into(),
                city: "Bilbao".into(),
                address: None,
            }),
        )
        .await?;
        assert_eq!(created.0, StatusCode::CREATED);
        assert_eq!(created.1.name, "Sede Norte");
        Ok(())
    }
}
