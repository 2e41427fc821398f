use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingsResponse, CreateBookingRequest, CreateBookingResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{booking::event::CreateBooking, id::BookingId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn create_booking(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    req.validate(&())?;

    if req.check_out_date <= req.check_in_date {
        return Err(AppError::UnprocessableEntity(
            "check-out date must be after check-in date".into(),
        ));
    }

    // Unknown or invalid promo codes are dropped without an error here;
    // only the validation endpoint reports them.
    let coupon = req
        .promo_code
        .as_deref()
        .and_then(|code| registry.coupon_registry().lookup(code).cloned());

    let event = CreateBooking::new(
        req.guest_name,
        req.guest_email,
        req.room_id,
        req.check_in_date,
        req.check_out_date,
        coupon,
    );

    registry
        .booking_repository()
        .create(event)
        .await
        .map(CreateBookingResponse::from)
        .map(|booking| (StatusCode::CREATED, Json(booking)))
}

pub async fn show_booking_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .booking_repository()
        .find_all()
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .booking_repository()
        .cancel(booking_id)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .booking_repository()
        .delete(booking_id)
        .await
        .map(|_| StatusCode::OK)
}
