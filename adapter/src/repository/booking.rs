use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        booking::{event::CreateBooking, Booking},
        id::{BookingId, GuestId},
        pricing::Quote,
    },
    repository::booking::BookingRepository,
};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        // The availability check and the insert must agree even against
        // concurrent requests for the same room and range.
        self.set_transaction_serializable(&mut tx).await?;

        // Ranges are half-open [check_in, check_out): an existing booking
        // overlaps iff it starts before the new check-out and ends after
        // the new check-in.
        let conflict: Option<BookingId> = sqlx::query_scalar(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE room_id = $1
                  AND status <> 'cancelled'
                  AND check_in_date < $3
                  AND check_out_date > $2
                LIMIT 1
            "#,
        )
        .bind(event.room_id)
        .bind(event.check_in)
        .bind(event.check_out)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if conflict.is_some() {
            return Err(AppError::BookingConflict(format!(
                "room ({}) is already booked for the requested dates",
                event.room_id
            )));
        }

        let guest_id = self
            .resolve_guest(&mut tx, &event.guest_name, &event.guest_email)
            .await?;

        let price_per_night: Decimal =
            sqlx::query_scalar("SELECT price_per_night FROM rooms WHERE room_id = $1")
                .bind(event.room_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?
                .ok_or_else(|| {
                    AppError::EntityNotFound(format!("room ({}) not found", event.room_id))
                })?;

        let quote = Quote::calculate(
            price_per_night,
            event.check_in,
            event.check_out,
            event.coupon.as_ref(),
        );
        let coupon_code = event.coupon.map(|rule| rule.code);

        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                INSERT INTO bookings
                (booking_id, guest_id, room_id, check_in_date, check_out_date,
                 total_price, discount_amount, coupon_code, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'confirmed')
                RETURNING booking_id, guest_id, room_id, check_in_date, check_out_date,
                          total_price, discount_amount, coupon_code, status, created_at
            "#,
        )
        .bind(BookingId::new())
        .bind(guest_id)
        .bind(event.room_id)
        .bind(event.check_in)
        .bind(event.check_out)
        .bind(quote.total.round_dp(2))
        .bind(quote.discount.round_dp(2))
        .bind(&coupon_code)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_serialization_failure(&e) {
                booking_lost_to_concurrent_writer()
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        tx.commit().await.map_err(|e| {
            if is_serialization_failure(&e) {
                booking_lost_to_concurrent_writer()
            } else {
                AppError::TransactionError(e)
            }
        })?;

        row.try_into()
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT booking_id, guest_id, room_id, check_in_date, check_out_date,
                       total_price, discount_amount, coupon_code, status, created_at
                FROM bookings
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn cancel(&self, booking_id: BookingId) -> AppResult<()> {
        let res = sqlx::query("UPDATE bookings SET status = 'cancelled' WHERE booking_id = $1")
            .bind(booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }

        Ok(())
    }

    async fn delete(&self, booking_id: BookingId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }

        Ok(())
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // Guests are keyed by email. The unique constraint makes the insert
    // idempotent under races: a concurrent insert surfaces as a conflict
    // that we resolve by re-reading the winner's row.
    async fn resolve_guest(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        name: &str,
        email: &str,
    ) -> AppResult<GuestId> {
        let existing: Option<GuestId> =
            sqlx::query_scalar("SELECT guest_id FROM guests WHERE email = $1")
                .bind(email)
                .fetch_optional(&mut **tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        if let Some(guest_id) = existing {
            return Ok(guest_id);
        }

        let inserted: Option<GuestId> = sqlx::query_scalar(
            r#"
                INSERT INTO guests (guest_id, name, email)
                VALUES ($1, $2, $3)
                ON CONFLICT (email) DO NOTHING
                RETURNING guest_id
            "#,
        )
        .bind(GuestId::new())
        .bind(name)
        .bind(email)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        match inserted {
            Some(guest_id) => Ok(guest_id),
            None => sqlx::query_scalar("SELECT guest_id FROM guests WHERE email = $1")
                .bind(email)
                .fetch_one(&mut **tx)
                .await
                .map_err(AppError::SpecificOperationError),
        }
    }
}

// SQLSTATE 40001: the serializable transaction lost to a concurrent writer,
// which for this table means the range was booked first.
fn is_serialization_failure(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("40001")
    )
}

fn booking_lost_to_concurrent_writer() -> AppError {
    AppError::BookingConflict("room is already booked for the requested dates".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{redis::RedisClient, repository::room::RoomRepositoryImpl};
    use chrono::NaiveDate;
    use kernel::{
        model::{
            coupon::{CouponKind, CouponRule},
            id::RoomId,
            room::{event::CreateRoom, RoomStatus},
        },
        repository::room::RoomRepository,
    };
    use rust_decimal_macros::dec;
    use shared::config::RedisConfig;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn unreachable_redis() -> Arc<RedisClient> {
        let config = RedisConfig {
            host: "127.0.0.1".into(),
            port: 6399,
        };
        Arc::new(RedisClient::new(&config).unwrap())
    }

    async fn seed_room(pool: sqlx::PgPool, price: Decimal) -> anyhow::Result<RoomId> {
        let rooms = RoomRepositoryImpl::new(ConnectionPool::new(pool), unreachable_redis());
        let room = rooms
            .create(CreateRoom {
                room_number: "101".into(),
                room_type: "Single".into(),
                price_per_night: price,
                status: RoomStatus::Available,
            })
            .await?;
        Ok(room.id)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_with_percent_coupon_prices_the_stay(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let room_id = seed_room(pool.clone(), dec!(100.00)).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking = repo
            .create(CreateBooking::new(
                "Ada Lovelace".into(),
                "ada@example.com".into(),
                room_id,
                date(2025, 12, 1),
                date(2025, 12, 4),
                Some(CouponRule::new("SAVE10", CouponKind::Percent, dec!(10))),
            ))
            .await?;

        assert_eq!(booking.total_price, dec!(270.00));
        assert_eq!(booking.discount_amount, dec!(30.00));
        assert_eq!(booking.coupon_code.as_deref(), Some("SAVE10"));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn overlapping_booking_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let room_id = seed_room(pool.clone(), dec!(100.00)).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateBooking::new(
            "Ada Lovelace".into(),
            "ada@example.com".into(),
            room_id,
            date(2025, 12, 1),
            date(2025, 12, 3),
            None,
        ))
        .await?;

        let res = repo
            .create(CreateBooking::new(
                "Grace Hopper".into(),
                "grace@example.com".into(),
                room_id,
                date(2025, 12, 2),
                date(2025, 12, 4),
                None,
            ))
            .await;

        assert!(matches!(res, Err(AppError::BookingConflict(_))));
        assert_eq!(repo.find_all().await?.len(), 1);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn back_to_back_stays_do_not_overlap(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let room_id = seed_room(pool.clone(), dec!(100.00)).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateBooking::new(
            "Ada Lovelace".into(),
            "ada@example.com".into(),
            room_id,
            date(2025, 12, 1),
            date(2025, 12, 3),
            None,
        ))
        .await?;

        // check-out day equals the next check-in day; half-open ranges touch
        // without overlapping
        repo.create(CreateBooking::new(
            "Grace Hopper".into(),
            "grace@example.com".into(),
            room_id,
            date(2025, 12, 3),
            date(2025, 12, 5),
            None,
        ))
        .await?;

        assert_eq!(repo.find_all().await?.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn guest_row_is_reused_across_bookings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let room_id = seed_room(pool.clone(), dec!(100.00)).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let first = repo
            .create(CreateBooking::new(
                "Ada Lovelace".into(),
                "ada@example.com".into(),
                room_id,
                date(2025, 12, 1),
                date(2025, 12, 3),
                None,
            ))
            .await?;
        let second = repo
            .create(CreateBooking::new(
                "Ada Lovelace".into(),
                "ada@example.com".into(),
                room_id,
                date(2025, 12, 10),
                date(2025, 12, 12),
                None,
            ))
            .await?;

        assert_eq!(first.guest_id, second.guest_id);

        let guest_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guests")
            .fetch_one(&pool)
            .await?;
        assert_eq!(guest_count, 1);
        assert_eq!(repo.find_all().await?.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn cancelled_booking_frees_the_range(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let room_id = seed_room(pool.clone(), dec!(100.00)).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking = repo
            .create(CreateBooking::new(
                "Ada Lovelace".into(),
                "ada@example.com".into(),
                room_id,
                date(2025, 12, 1),
                date(2025, 12, 3),
                None,
            ))
            .await?;

        repo.cancel(booking.id).await?;

        repo.create(CreateBooking::new(
            "Grace Hopper".into(),
            "grace@example.com".into(),
            room_id,
            date(2025, 12, 1),
            date(2025, 12, 3),
            None,
        ))
        .await?;

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn unknown_room_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let res = repo
            .create(CreateBooking::new(
                "Ada Lovelace".into(),
                "ada@example.com".into(),
                RoomId::new(),
                date(2025, 12, 1),
                date(2025, 12, 3),
                None,
            ))
            .await;

        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        // the rolled-back attempt must not leave a guest row behind
        let guest_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guests")
            .fetch_one(&pool)
            .await?;
        assert_eq!(guest_count, 0);

        Ok(())
    }
}
