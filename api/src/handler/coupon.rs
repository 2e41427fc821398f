use crate::model::coupon::{CouponValidationResponse, ValidateCouponRequest};
use axum::{extract::State, Json};
use registry::AppRegistry;

pub async fn validate_coupon(
    State(registry): State<AppRegistry>,
    Json(req): Json<ValidateCouponRequest>,
) -> Json<CouponValidationResponse> {
    let response = match registry.coupon_registry().lookup(&req.code) {
        Some(rule) => CouponValidationResponse {
            valid: true,
            coupon: Some(rule.into()),
        },
        None => CouponValidationResponse {
            valid: false,
            coupon: None,
        },
    };
    Json(response)
}
