use kernel::model::{
    id::RoomId,
    room::{Room, RoomStatus},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::AppError;
use std::str::FromStr;

// Serializable so the room-list cache can hold rows as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub status: String,
}

impl TryFrom<RoomRow> for Room {
    type Error = AppError;

    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        let RoomRow {
            room_id,
            room_number,
            room_type,
            price_per_night,
            status,
        } = value;
        let status = RoomStatus::from_str(&status)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown room status: {status}")))?;
        Ok(Room {
            id: room_id,
            room_number,
            room_type,
            price_per_night,
            status,
        })
    }
}
