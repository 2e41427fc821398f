use crate::model::id::GuestId;
use chrono::{DateTime, Utc};

// Guests are created lazily by the booking flow on first use of an email
// address. The core never deletes them.
#[derive(Debug, Clone)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
