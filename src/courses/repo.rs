use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::repo_types::{Course, CourseWithOwnerRow, NewCourse};

const SELECT_WITH_OWNER: &str = r#"
    SELECT c.id, c.user_id, c.title, c.description, c.estimated_time, c.materials_needed,
           c.created_at, c.updated_at,
           u.first_name AS owner_first_name,
           u.last_name AS owner_last_name,
           u.email_address AS owner_email_address
      FROM courses c
      JOIN users u ON u.id = c.user_id
"#;

/// All courses with owners, title ascending.
pub async fn list_with_owner(db: &SqlitePool) -> sqlx::Result<Vec<CourseWithOwnerRow>> {
    let sql = format!("{SELECT_WITH_OWNER} ORDER BY c.title ASC, c.id ASC");
    sqlx::query_as::<_, CourseWithOwnerRow>(&sql)
        .fetch_all(db)
        .await
}

pub async fn find_with_owner(db: &SqlitePool, id: i64) -> sqlx::Result<Option<CourseWithOwnerRow>> {
    let sql = format!("{SELECT_WITH_OWNER} WHERE c.id = $1");
    sqlx::query_as::<_, CourseWithOwnerRow>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn find(db: &SqlitePool, id: i64) -> sqlx::Result<Option<Course>> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT id, user_id, title, description, estimated_time, materials_needed,
               created_at, updated_at
          FROM courses
         WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Inserts a course owned by `user_id` and returns its ID.
pub async fn insert(db: &SqlitePool, user_id: i64, course: &NewCourse) -> sqlx::Result<i64> {
    let now = OffsetDateTime::now_utc();
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO courses
            (user_id, title, description, estimated_time, materials_needed, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(&course.title)
    .bind(&course.description)
    .bind(&course.estimated_time)
    .bind(&course.materials_needed)
    .bind(now)
    .bind(now)
    .fetch_one(db)
    .await
}

pub async fn update(db: &SqlitePool, id: i64, course: &NewCourse) -> sqlx::Result<u64> {
    let res = sqlx::query(
        r#"
        UPDATE courses
           SET title = $1, description = $2, estimated_time = $3, materials_needed = $4,
               updated_at = $5
         WHERE id = $6
        "#,
    )
    .bind(&course.title)
    .bind(&course.description)
    .bind(&course.estimated_time)
    .bind(&course.materials_needed)
    .bind(OffsetDateTime::now_utc())
    .bind(id)
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete(db: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query("DELETE FROM courses WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}
