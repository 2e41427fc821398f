use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, UpdateRoom},
        Room, RoomStatus,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatusName {
    Available,
    Unavailable,
}

impl From<RoomStatus> for RoomStatusName {
    fn from(value: RoomStatus) -> Self {
        match value {
            RoomStatus::Available => Self::Available,
            RoomStatus::Unavailable => Self::Unavailable,
        }
    }
}

impl From<RoomStatusName> for RoomStatus {
    fn from(value: RoomStatusName) -> Self {
        match value {
            RoomStatusName::Available => Self::Available,
            RoomStatusName::Unavailable => Self::Unavailable,
        }
    }
}

fn positive_price(value: &Decimal, _context: &()) -> garde::Result {
    if *value <= Decimal::ZERO {
        return Err(garde::Error::new("price per night must be positive"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub room_number: String,
    #[garde(length(min = 1))]
    pub room_type: String,
    #[garde(custom(positive_price))]
    pub price_per_night: Decimal,
    #[garde(skip)]
    #[serde(default = "default_room_status")]
    pub status: RoomStatusName,
}

fn default_room_status() -> RoomStatusName {
    RoomStatusName::Available
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            room_number,
            room_type,
            price_per_night,
            status,
        } = value;
        CreateRoom {
            room_number,
            room_type,
            price_per_night,
            status: status.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[garde(length(min = 1))]
    pub room_number: String,
    #[garde(length(min = 1))]
    pub room_type: String,
    #[garde(custom(positive_price))]
    pub price_per_night: Decimal,
    #[garde(skip)]
    pub status: RoomStatusName,
}

#[derive(new)]
pub struct UpdateRoomRequestWithId(RoomId, UpdateRoomRequest);

impl From<UpdateRoomRequestWithId> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithId) -> Self {
        let UpdateRoomRequestWithId(
            room_id,
            UpdateRoomRequest {
                room_number,
                room_type,
                price_per_night,
                status,
            },
        ) = value;
        UpdateRoom {
            room_id,
            room_number,
            room_type,
            price_per_night,
            status: status.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub room_number: String,
    pub room_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_night: Decimal,
    pub status: RoomStatusName,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            room_number,
            room_type,
            price_per_night,
            status,
        } = value;
        Self {
            id,
            room_number,
            room_type,
            price_per_night,
            status: status.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
