use crate::model::id::RoomId;
use rust_decimal::Decimal;
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Unavailable,
}
