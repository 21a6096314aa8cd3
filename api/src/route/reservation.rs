use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, reserve_room, show_my_reservations, show_reservation_list,
    show_reservations_on_date, show_room_reservations,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(reserve_room))
        .route("/", get(show_reservation_list))
        .route("/me", get(show_my_reservations))
        .route("/room/:room_id", get(show_room_reservations))
        .route("/date/:date", get(show_reservations_on_date))
        .route("/:reservation_id", delete(cancel_reservation));

    Router::new().nest("/reservations", reservation_routers)
}
