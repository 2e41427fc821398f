use crate::model::id::{BookingId, GuestId, RoomId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: Decimal,
    pub discount_amount: Decimal,
    pub coupon_code: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
}
