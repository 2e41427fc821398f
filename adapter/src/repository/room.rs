use crate::{
    database::{model::room::RoomRow, ConnectionPool},
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::RoomId,
        room::{
            event::{CreateRoom, DeleteRoom, UpdateRoom},
            Room,
        },
    },
    repository::room::RoomRepository,
};
use shared::error::{AppError, AppResult};
use std::sync::Arc;

const ROOM_LIST_CACHE_TTL: u64 = 60;

pub struct RoomListKey;

impl RedisKey for RoomListKey {
    type Value = RoomListValue;

    fn inner(&self) -> String {
        "rooms".to_string()
    }
}

pub struct RoomListValue(Vec<RoomRow>);

impl RedisValue for RoomListValue {
    fn inner(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl TryFrom<String> for RoomListValue {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        serde_json::from_str(&value)
            .map(Self)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let room_id = RoomId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO rooms (room_id, room_number, room_type, price_per_night, status)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(room_id)
        .bind(&event.room_number)
        .bind(&event.room_type)
        .bind(event.price_per_night)
        .bind(event.status.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no room record has been created".into(),
            ));
        }

        self.evict_room_list().await;

        Ok(Room {
            id: room_id,
            room_number: event.room_number,
            room_type: event.room_type,
            price_per_night: event.price_per_night,
            status: event.status,
        })
    }

    // Read-through: a cache hit skips the database entirely; a cache outage
    // degrades to a plain query, never to an error.
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        match self.kv.get(&RoomListKey).await {
            Ok(Some(RoomListValue(rows))) => {
                tracing::debug!("serving room list from cache");
                return rows.into_iter().map(Room::try_from).collect();
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "room list cache read failed, falling back to database");
            }
        }

        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT room_id, room_number, room_type, price_per_night, status
                FROM rooms
                ORDER BY room_number ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if let Err(e) = self
            .kv
            .set_ex(&RoomListKey, &RoomListValue(rows.clone()), ROOM_LIST_CACHE_TTL)
            .await
        {
            tracing::warn!(error = %e, "room list cache write failed");
        }

        rows.into_iter().map(Room::try_from).collect()
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT room_id, room_number, room_type, price_per_night, status
                FROM rooms
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Room::try_from).transpose()
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE rooms
                SET room_number = $1, room_type = $2, price_per_night = $3, status = $4
                WHERE room_id = $5
            "#,
        )
        .bind(&event.room_number)
        .bind(&event.room_type)
        .bind(event.price_per_night)
        .bind(event.status.as_ref())
        .bind(event.room_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified room not found".into()));
        }

        self.evict_room_list().await;

        Ok(())
    }

    async fn delete(&self, event: DeleteRoom) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM rooms WHERE room_id = $1")
            .bind(event.room_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified room not found".into()));
        }

        self.evict_room_list().await;

        Ok(())
    }
}

impl RoomRepositoryImpl {
    // Failed evictions are tolerated: readers then either also miss the
    // cache (outage) or see data at most ROOM_LIST_CACHE_TTL seconds old.
    async fn evict_room_list(&self) {
        if let Err(e) = self.kv.delete(&RoomListKey).await {
            tracing::warn!(error = %e, "room list cache eviction failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::room::RoomStatus;
    use rust_decimal_macros::dec;
    use shared::config::RedisConfig;

    // Port with no listener: every cache call fails fast, which is exactly
    // the degradation path under test.
    fn unreachable_redis() -> Arc<RedisClient> {
        let config = RedisConfig {
            host: "127.0.0.1".into(),
            port: 6399,
        };
        Arc::new(RedisClient::new(&config).unwrap())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn register_list_update_delete_room(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool), unreachable_redis());

        repo.create(CreateRoom {
            room_number: "202".into(),
            room_type: "Double".into(),
            price_per_night: dec!(150.00),
            status: RoomStatus::Available,
        })
        .await?;
        let created = repo
            .create(CreateRoom {
                room_number: "101".into(),
                room_type: "Single".into(),
                price_per_night: dec!(90.00),
                status: RoomStatus::Available,
            })
            .await?;

        // ordered by room number even though insertion order differs
        let rooms = repo.find_all().await?;
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].room_number, "101");
        assert_eq!(rooms[1].room_number, "202");

        let found = repo.find_by_id(created.id).await?;
        assert!(found.is_some());
        assert_eq!(found.unwrap().price_per_night, dec!(90.00));

        repo.update(UpdateRoom {
            room_id: created.id,
            room_number: "101".into(),
            room_type: "Single".into(),
            price_per_night: dec!(95.00),
            status: RoomStatus::Unavailable,
        })
        .await?;

        let updated = repo.find_by_id(created.id).await?.unwrap();
        assert_eq!(updated.price_per_night, dec!(95.00));
        assert_eq!(updated.status, RoomStatus::Unavailable);

        repo.delete(DeleteRoom {
            room_id: created.id,
        })
        .await?;
        assert!(repo.find_by_id(created.id).await?.is_none());
        assert_eq!(repo.find_all().await?.len(), 1);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn missing_room_update_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoomRepositoryImpl::new(ConnectionPool::new(pool), unreachable_redis());

        let res = repo
            .update(UpdateRoom {
                room_id: RoomId::new(),
                room_number: "900".into(),
                room_type: "Suite".into(),
                price_per_night: dec!(300.00),
                status: RoomStatus::Available,
            })
            .await;

        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }
}
