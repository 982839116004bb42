//! Repository for the `defect_types` table.

use shifttally_core::types::DbId;
use sqlx::PgPool;

use crate::models::defect_type::{CreateDefectType, DefectType};

const COLUMNS: &str = "id, defect_name, created_at";

/// Provides list/create/delete for defect types.
pub struct DefectTypeRepo;

impl DefectTypeRepo {
    /// Insert a new defect type, returning the created row.
    ///
    /// The `uq_defect_types_defect_name` constraint rejects duplicates.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDefectType,
    ) -> Result<DefectType, sqlx::Error> {
        let query = format!(
            "INSERT INTO defect_types (defect_name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DefectType>(&query)
            .bind(&input.defect_name)
            .fetch_one(pool)
            .await
    }

    /// List all defect types in definition order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DefectType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM defect_types ORDER BY id ASC");
        sqlx::query_as::<_, DefectType>(&query).fetch_all(pool).await
    }

    /// Number of defined defect types, checked against the configured cap.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM defect_types")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete a defect type by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM defect_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
