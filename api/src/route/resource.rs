use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::resource::{delete_resource, register_resource, show_resource_list};

pub fn build_resource_routers() -> Router<AppRegistry> {
    let resource_routers = Router::new()
        .route("/", post(register_resource))
        .route("/", get(show_resource_list))
        .route("/:resource_id", delete(delete_resource));

    Router::new().nest("/resources", resource_routers)
}
