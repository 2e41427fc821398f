use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    cancel_booking, create_booking, delete_booking, show_booking_list,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", post(create_booking))
        .route("/", get(show_booking_list))
        .route("/:booking_id/cancel", put(cancel_booking))
        .route("/:booking_id", delete(delete_booking));

    Router::new().nest("/bookings", booking_routers)
}
