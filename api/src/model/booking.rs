use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, GuestId, RoomId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub guest_name: String,
    #[garde(email)]
    pub guest_email: String,
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub check_in_date: NaiveDate,
    #[garde(skip)]
    pub check_out_date: NaiveDate,
    #[garde(skip)]
    pub promo_code: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusName {
    Confirmed,
    Cancelled,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
    pub coupon_code: Option<String>,
    pub status: BookingStatusName,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            guest_id,
            room_id,
            check_in,
            check_out,
            total_price,
            discount_amount,
            coupon_code,
            status,
            created_at,
        } = value;
        Self {
            booking_id: id,
            guest_id,
            room_id,
            check_in_date: check_in,
            check_out_date: check_out,
            total_price,
            discount_amount,
            coupon_code,
            status: status.into(),
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: BookingResponse,
}

impl From<Booking> for CreateBookingResponse {
    fn from(value: Booking) -> Self {
        Self {
            success: true,
            booking: BookingResponse::from(value),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}
