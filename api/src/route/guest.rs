use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::guest::show_guest_list;

pub fn build_guest_routers() -> Router<AppRegistry> {
    let guest_routers = Router::new().route("/", get(show_guest_list));

    Router::new().nest("/guests", guest_routers)
}
