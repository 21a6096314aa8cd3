use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{change_role, create_user, delete_user, get_current_user, list_users};

pub fn build_user_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/me", get(get_current_user))
        .route("/:user_id/role", put(change_role))
        .route("/:user_id", delete(delete_user));

    Router::new().nest("/users", user_routers)
}
