//! PostgreSQL Shopper Repository Implementation
//!
//! Implements the ShopperRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::gateways::ShopperRepository;
use crate::domain::models::shopper::{Shopper, Username};
use crate::shared::errors::RepositoryError;

/// Database row representation for the shoppers table
#[derive(Debug, sqlx::FromRow)]
struct ShopperRow {
    username: String,
    full_name: String,
    email: String,
    street: String,
    city: String,
    state: String,
    zip_code: String,
    date_joined: NaiveDate,
}

impl From<ShopperRow> for Shopper {
    fn from(row: ShopperRow) -> Self {
        Shopper::restore(
            Username::new(row.username),
            row.full_name,
            row.email,
            row.street,
            row.city,
            row.state,
            row.zip_code,
            row.date_joined,
        )
    }
}

/// PostgreSQL implementation of ShopperRepository
pub struct PostgresShopperRepository {
    pool: PgPool,
}

impl PostgresShopperRepository {
    /// Create a new PostgresShopperRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopperRepository for PostgresShopperRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Shopper>, RepositoryError> {
        let row = sqlx::query_as::<_, ShopperRow>(
            r#"
            SELECT username, full_name, email, street, city, state, zip_code, date_joined
            FROM shoppers
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Shopper::from))
    }

    async fn find_all(&self) -> Result<Vec<Shopper>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShopperRow>(
            r#"
            SELECT username, full_name, email, street, city, state, zip_code, date_joined
            FROM shoppers
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Shopper::from).collect())
    }

    async fn create(&self, shopper: &Shopper) -> Result<Shopper, RepositoryError> {
        let row = sqlx::query_as::<_, ShopperRow>(
            r#"
            INSERT INTO shoppers (
                username, full_name, email, street, city, state, zip_code, date_joined
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING username, full_name, email, street, city, state, zip_code, date_joined
            "#,
        )
        .bind(shopper.username().as_str())
        .bind(shopper.full_name())
        .bind(shopper.email())
        .bind(shopper.street())
        .bind(shopper.city())
        .bind(shopper.state())
        .bind(shopper.zip_code())
        .bind(shopper.date_joined())
        .fetch_one(&self.pool)
        .await?;

        Ok(Shopper::from(row))
    }

    async fn update(&self, shopper: &Shopper) -> Result<Option<Shopper>, RepositoryError> {
        let row = sqlx::query_as::<_, ShopperRow>(
            r#"
            UPDATE shoppers
            SET full_name = $2,
                email = $3,
                street = $4,
                city = $5,
                state = $6,
                zip_code = $7
            WHERE username = $1
            RETURNING username, full_name, email, street, city, state, zip_code, date_joined
            "#,
        )
        .bind(shopper.username().as_str())
        .bind(shopper.full_name())
        .bind(shopper.email())
        .bind(shopper.street())
        .bind(shopper.city())
        .bind(shopper.state())
        .bind(shopper.zip_code())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Shopper::from))
    }

    async fn delete(&self, username: &Username) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM shoppers
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
