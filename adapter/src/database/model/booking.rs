use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, GuestId, RoomId},
};
use rust_decimal::Decimal;
use shared::error::AppError;
use std::str::FromStr;

#[derive(Debug, sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: Decimal,
    pub discount_amount: Decimal,
    pub coupon_code: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            guest_id,
            room_id,
            check_in_date,
            check_out_date,
            total_price,
            discount_amount,
            coupon_code,
            status,
            created_at,
        } = value;
        let status = BookingStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown booking status: {status}"))
        })?;
        Ok(Booking {
            id: booking_id,
            guest_id,
            room_id,
            check_in: check_in_date,
            check_out: check_out_date,
            total_price,
            discount_amount,
            coupon_code,
            status,
            created_at,
        })
    }
}
