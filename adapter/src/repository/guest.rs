use crate::database::{model::guest::GuestRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{model::guest::Guest, repository::guest::GuestRepository};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct GuestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GuestRepository for GuestRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Guest>> {
        let rows = sqlx::query_as::<_, GuestRow>(
            r#"
                SELECT guest_id, name, email, created_at
                FROM guests
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Guest::from).collect())
    }
}
