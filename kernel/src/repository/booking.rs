use crate::model::{
    booking::{event::CreateBooking, Booking},
    id::BookingId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // Runs the availability check and the insert as one unit; concurrent
    // requests for an overlapping range see at most one winner.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn cancel(&self, booking_id: BookingId) -> AppResult<()>;
    async fn delete(&self, booking_id: BookingId) -> AppResult<()>;
}
