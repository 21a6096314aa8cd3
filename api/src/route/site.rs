use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::site::{delete_site, register_site, show_site, show_site_list, update_site};

pub fn build_site_routers() -> Router<AppRegistry> {
    let site_routers = Router::new()
        .route("/", post(register_site))
        .route("/", get(show_site_list))
        .route("/:site_id", get(show_site))
        .route("/:site_id", put(update_site))
        .route("/:site_id", delete(delete_site));

    Router::new().nest("/sites", site_routers)
}
