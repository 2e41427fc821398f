use chrono::{DateTime, Utc};
use kernel::model::{guest::Guest, id::GuestId};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    pub guest_id: GuestId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Guest> for GuestResponse {
    fn from(value: Guest) -> Self {
        let Guest {
            id,
            name,
            email,
            created_at,
        } = value;
        Self {
            guest_id: id,
            name,
            email,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestsResponse {
    pub items: Vec<GuestResponse>,
}

impl From<Vec<Guest>> for GuestsResponse {
    fn from(value: Vec<Guest>) -> Self {
        Self {
            items: value.into_iter().map(GuestResponse::from).collect(),
        }
    }
}
