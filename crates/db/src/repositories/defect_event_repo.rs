//! Repository for the `defect_events` table.

use shifttally_core::types::DbId;
use sqlx::PgPool;

use crate::models::defect_event::DefectEvent;

const COLUMNS: &str = "id, employee_name, defect_name, defect_count, event_time, created_at";

/// Provides create, list-all, and update-by-id for raw defect events.
pub struct DefectEventRepo;

impl DefectEventRepo {
    /// Insert a new tally event, returning the created row.
    ///
    /// `defect_count` is passed in canonical text form; the write boundary
    /// has already validated it.
    pub async fn create(
        pool: &PgPool,
        employee_name: &str,
        defect_name: &str,
        defect_count: &str,
        event_time: &str,
    ) -> Result<DefectEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO defect_events (employee_name, defect_name, defect_count, event_time)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DefectEvent>(&query)
            .bind(employee_name)
            .bind(defect_name)
            .bind(defect_count)
            .bind(event_time)
            .fetch_one(pool)
            .await
    }

    /// List every recorded event, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DefectEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM defect_events ORDER BY id ASC");
        sqlx::query_as::<_, DefectEvent>(&query).fetch_all(pool).await
    }

    /// Replace a record's count (the grid write-back path).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_count(
        pool: &PgPool,
        id: DbId,
        defect_count: &str,
    ) -> Result<Option<DefectEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE defect_events SET defect_count = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DefectEvent>(&query)
            .bind(id)
            .bind(defect_count)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM defect_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
