//! Repository for the `color_codes` table.

use shifttally_core::types::DbId;
use sqlx::PgPool;

use crate::models::color_code::{ColorCode, CreateColorCode};

const COLUMNS: &str = "id, color_name, hex_code, created_at";

/// Provides list/create/delete for the color reference list.
pub struct ColorCodeRepo;

impl ColorCodeRepo {
    /// Insert a new color code, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateColorCode) -> Result<ColorCode, sqlx::Error> {
        let query = format!(
            "INSERT INTO color_codes (color_name, hex_code) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ColorCode>(&query)
            .bind(&input.color_name)
            .bind(&input.hex_code)
            .fetch_one(pool)
            .await
    }

    /// List all color codes in definition order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ColorCode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM color_codes ORDER BY id ASC");
        sqlx::query_as::<_, ColorCode>(&query).fetch_all(pool).await
    }

    /// Delete a color code by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM color_codes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
