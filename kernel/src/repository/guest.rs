use crate::model::guest::Guest;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Guest>>;
}
