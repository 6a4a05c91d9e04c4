use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::{info, warn};

use super::{credentials::Credentials, password::verify_password};
use crate::{error::AppError, state::AppState, users::repo_types::User};

/// Authenticates the request with Basic credentials and yields the user ID.
pub struct AuthUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        else {
            warn!("auth header not found");
            return Err(AppError::Unauthorized("Auth header not found".into()));
        };

        let creds = Credentials::from_header(header).ok_or_else(|| {
            warn!("malformed basic credentials");
            AppError::Unauthorized("Invalid Authorization header".into())
        })?;
        let email = creds.name.trim().to_lowercase();

        let Some(user) = User::find_by_email(&state.db, &email).await? else {
            warn!(%email, "user not found");
            return Err(AppError::Unauthorized(format!(
                "User not found for username: {}",
                email
            )));
        };

        if !verify_password(&creds.pass, &user.password)? {
            warn!(%email, user_id = user.id, "authentication failure");
            return Err(AppError::Unauthorized(format!(
                "Authentication failure for username: {}",
                email
            )));
        }

        info!(%email, user_id = user.id, "authentication successful");
        Ok(AuthUser(user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::password::hash_password, users::repo_types::NewUser};
    use axum::http::{header::AUTHORIZATION, Request};

    async fn state_with_user(email: &str, password: &str) -> (AppState, i64) {
        let state = AppState::in_memory().await.unwrap();
        let new_user = NewUser {
            first_name: "Sally".into(),
            last_name: "Jones".into(),
            email_address: email.into(),
            password: password.into(),
        };
        let hash = hash_password(password).unwrap();
        let user = User::create(&state.db, &new_user, &hash).await.unwrap();
        (state, user.id)
    }

    async fn authenticate(state: &AppState, header: Option<String>) -> Result<i64, AppError> {
        let mut builder = Request::builder();
        if let Some(h) = header {
            builder = builder.header(AUTHORIZATION, h);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, state)
            .await
            .map(|AuthUser(id)| id)
    }

    fn header(name: &str, pass: &str) -> Option<String> {
        Some(
            Credentials {
                name: name.into(),
                pass: pass.into(),
            }
            .to_header(),
        )
    }

    #[tokio::test]
    async fn stored_hash_is_accepted_for_matching_credentials() {
        let (state, id) = state_with_user("sally@jones.com", "sallypassword").await;
        // lookup lower-cases the username
        let got = authenticate(&state, header("Sally@Jones.com", "sallypassword")).await;
        assert_eq!(got.unwrap(), id);
    }

    #[tokio::test]
    async fn rejections_are_unauthorized() {
        let (state, _) = state_with_user("sally@jones.com", "sallypassword").await;

        let missing = authenticate(&state, None).await.unwrap_err();
        assert!(matches!(missing, AppError::Unauthorized(ref m) if m == "Auth header not found"));

        let wrong = authenticate(&state, header("sally@jones.com", "nope")).await.unwrap_err();
        assert!(matches!(
            wrong,
            AppError::Unauthorized(ref m) if m.contains("Authentication failure")
        ));

        let unknown = authenticate(&state, header("ghost@jones.com", "x")).await.unwrap_err();
        assert!(matches!(unknown, AppError::Unauthorized(ref m) if m.contains("User not found")));
    }
}
