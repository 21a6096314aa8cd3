use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::room::{
    attach_resource, delete_room, detach_resource, register_room, show_room, show_room_list,
    show_room_resources, update_room,
};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", post(register_room))
        .route("/", get(show_room_list))
        .route("/:room_id", get(show_room))
        .route("/:room_id", put(update_room))
        .route("/:room_id", delete(delete_room))
        .route("/:room_id/resources", get(show_room_resources))
        .route("/:room_id/resources", post(attach_resource))
        .route("/:room_id/resources/:resource_id", delete(detach_resource));

    Router::new().nest("/rooms", room_routers)
}
