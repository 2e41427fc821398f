use crate::model::{coupon::CouponRule, id::RoomId};
use chrono::NaiveDate;
use derive_new::new;

// The coupon is resolved against the registry before the event is built;
// an unknown promo code arrives here as None.
#[derive(new)]
pub struct CreateBooking {
    pub guest_name: String,
    pub guest_email: String,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub coupon: Option<CouponRule>,
}
