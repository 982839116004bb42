//! Repository for the `admins` table.

use sqlx::PgPool;

use crate::models::admin::Admin;

const COLUMNS: &str = "id, email, password_hash, role, created_at";

/// Provides credential storage for admin accounts.
pub struct AdminRepo;

impl AdminRepo {
    /// Insert a new admin with an already-hashed password.
    ///
    /// The `uq_admins_email` constraint rejects duplicate emails.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (email, password_hash) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(email)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Look up an admin by email for login.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE email = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
