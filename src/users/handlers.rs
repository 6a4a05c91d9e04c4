use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::CreateUserRequest, repo_types::User};
use crate::{
    app::route_not_found, auth::password::hash_password, auth::AuthUser, error::AppError,
    state::AppState, validation::parse_body,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(get_current_user)
            .post(create_user)
            .fallback(route_not_found),
    )
}

/// GET /users: the authenticated user's own record.
#[instrument(skip(state))]
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, AppError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;
    Ok(Json(user))
}

/// POST /users: signup.
#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let new_user = parse_body::<CreateUserRequest>(&body)?.validate()?;

    let hash = hash_password(&new_user.password)?;
    let user = User::create(&state.db, &new_user, &hash).await?;

    info!(user_id = user.id, email = %user.email_address, "user created");
    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
