use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Course {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Course joined with its owner's public columns.
#[derive(Debug, FromRow)]
pub struct CourseWithOwnerRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email_address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub user: Owner,
}

impl From<CourseWithOwnerRow> for CourseDetails {
    fn from(r: CourseWithOwnerRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            estimated_time: r.estimated_time,
            materials_needed: r.materials_needed,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            user: Owner {
                id: r.user_id,
                first_name: r.owner_first_name,
                last_name: r.owner_last_name,
                email_address: r.owner_email_address,
            },
        }
    }
}

/// Validated course content, used for both create and update.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}
