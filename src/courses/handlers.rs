use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::CourseRequest,
    repo,
    repo_types::{Course, CourseDetails},
};
use crate::{
    app::route_not_found, auth::AuthUser, error::AppError, state::AppState,
    validation::parse_body,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(list_courses)
                .post(create_course)
                .fallback(route_not_found),
        )
        .route(
            "/courses/:id",
            get(get_course)
                .put(update_course)
                .delete(delete_course)
                .fallback(route_not_found),
        )
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseDetails>>, AppError> {
    let rows = repo::list_with_owner(&state.db).await?;
    Ok(Json(rows.into_iter().map(CourseDetails::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseDetails>, AppError> {
    let course_id = parse_id(&id)?;
    let row = repo::find_with_owner(&state.db, course_id)
        .await?
        .ok_or_else(|| AppError::course_not_found(&id))?;
    Ok(Json(row.into()))
}

#[instrument(skip(state, body))]
pub async fn create_course(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let course = parse_body::<CourseRequest>(&body)?.validate()?;

    let course_id = repo::insert(&state.db, user_id, &course).await?;
    info!(course_id, user_id, "course created");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&format!("/api/courses/{}", course_id))
            .map_err(|e| AppError::Unexpected(e.into()))?,
    );
    Ok((StatusCode::CREATED, headers))
}

#[instrument(skip(state, body))]
pub async fn update_course(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let course = parse_body::<CourseRequest>(&body)?.validate()?;

    let existing = owned_course(&state, &id, user_id).await?;
    let rows = repo::update(&state.db, existing.id, &course).await?;
    ensure_written(rows, &id)?;

    info!(course_id = existing.id, user_id, "course updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let existing = owned_course(&state, &id, user_id).await?;
    let rows = repo::delete(&state.db, existing.id).await?;
    ensure_written(rows, &id)?;

    info!(course_id = existing.id, user_id, "course deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Loads the course and checks the requester owns it: 404 if absent, 403 if not theirs.
async fn owned_course(state: &AppState, raw_id: &str, user_id: i64) -> Result<Course, AppError> {
    let course_id = parse_id(raw_id)?;
    let course = repo::find(&state.db, course_id)
        .await?
        .ok_or_else(|| AppError::course_not_found(raw_id))?;

    if !course.is_owned_by(user_id) {
        warn!(course_id, user_id, owner_id = course.user_id, "ownership check failed");
        return Err(AppError::Forbidden(
            "You may only modify courses that you own".into(),
        ));
    }
    Ok(course)
}

/// The row can vanish between the ownership check and the write.
fn ensure_written(rows: u64, raw_id: &str) -> Result<(), AppError> {
    if rows == 0 {
        return Err(AppError::course_not_found(raw_id));
    }
    Ok(())
}

/// Non-numeric IDs can never match a row, so they are reported as not found.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::course_not_found(raw))
}
