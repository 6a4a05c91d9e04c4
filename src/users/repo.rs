use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::repo_types::{NewUser, User};

impl User {
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email_address, password, created_at, updated_at
            FROM users
            WHERE email_address = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email_address, password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Inserts a user; `password_hash` must already be hashed.
    pub async fn create(db: &SqlitePool, new: &NewUser, password_hash: &str) -> sqlx::Result<User> {
        let now = OffsetDateTime::now_utc();
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users
                (first_name, last_name, email_address, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email_address, password, created_at, updated_at
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email_address)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
    }
}
