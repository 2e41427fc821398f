use chrono::{DateTime, Utc};
use kernel::model::{guest::Guest, id::GuestId};

#[derive(Debug, sqlx::FromRow)]
pub struct GuestRow {
    pub guest_id: GuestId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<GuestRow> for Guest {
    fn from(value: GuestRow) -> Self {
        let GuestRow {
            guest_id,
            name,
            email,
            created_at,
        } = value;
        Guest {
            id: guest_id,
            name,
            email,
            created_at,
        }
    }
}
