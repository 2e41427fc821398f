use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::coupon::validate_coupon;

pub fn build_coupon_routers() -> Router<AppRegistry> {
    let coupon_routers = Router::new().route("/validate", post(validate_coupon));

    Router::new().nest("/coupons", coupon_routers)
}
