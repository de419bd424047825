//! `SQLite` implementation of [`RestaurantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use restohub_app::ports::RestaurantRepository;
use restohub_domain::error::RestoHubError;
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::{NewRestaurant, Restaurant, RestaurantChanges};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Restaurant`].
struct Wrapper(Restaurant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Restaurant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(Restaurant {
            id: RestaurantId::from(id),
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO restaurants (name, address, phone) VALUES (?, ?, ?) RETURNING id, name, address, phone";
const SELECT_BY_ID: &str = "SELECT id, name, address, phone FROM restaurants WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, address, phone FROM restaurants ORDER BY id";
// NULL binds keep the stored value, so absent fields survive the update.
const UPDATE: &str = "UPDATE restaurants \
     SET name = COALESCE(?, name), address = COALESCE(?, address), phone = COALESCE(?, phone) \
     WHERE id = ? \
     RETURNING id, name, address, phone";
const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = ?";

/// `SQLite`-backed restaurant repository.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&restaurant.name)
                .bind(&restaurant.address)
                .bind(&restaurant.phone)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: RestaurantId,
        changes: RestaurantChanges,
    ) -> impl Future<Output = Result<Restaurant, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(changes.name)
                .bind(changes.address)
                .bind(changes.phone)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Wrapper::maybe(row).ok_or_else(|| Restaurant::not_found(id).into())
        }
    }

    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<(), RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(Restaurant::not_found(id).into());
            }
            Ok(())
        }
    }
}
