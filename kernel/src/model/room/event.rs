use crate::model::{
    id::RoomId,
    room::RoomStatus,
};
use rust_decimal::Decimal;

pub struct CreateRoom {
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub status: RoomStatus,
}

#[derive(Debug)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub status: RoomStatus,
}

#[derive(Debug)]
pub struct DeleteRoom {
    pub room_id: RoomId,
}
