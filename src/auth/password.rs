use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hashes a signup password into the PHC string kept in `users.password`.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("hash signup password: {}", e))
}

/// Checks a Basic-Auth password against the stored PHC string.
///
/// `Ok(false)` is a wrong password; `Err` means the stored value is not a PHC hash.
pub fn verify_password(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| anyhow::anyhow!("stored password is not a PHC hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state::AppState, users::repo_types::NewUser, users::repo_types::User};

    fn joe(password: &str) -> NewUser {
        NewUser {
            first_name: "Joe".into(),
            last_name: "Smith".into(),
            email_address: "joe@smith.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn stored_hash_verifies_against_signup_password() {
        let state = AppState::in_memory().await.unwrap();
        let new_user = joe("joepassword");
        let hash = hash_password(&new_user.password).unwrap();
        User::create(&state.db, &new_user, &hash).await.unwrap();

        let stored = User::find_by_email(&state.db, "joe@smith.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password, "joepassword");
        assert!(stored.password.starts_with("$argon2id$"));
        assert!(verify_password("joepassword", &stored.password).unwrap());
        assert!(!verify_password("JoePassword", &stored.password).unwrap());
    }

    #[test]
    fn passwords_with_colons_and_spaces_survive() {
        // Basic-Auth only splits on the first ':', so these reach verify intact
        let plain = " pa:ss word ";
        let hash = hash_password(plain).unwrap();
        assert!(verify_password(plain, &hash).unwrap());
        assert!(!verify_password(plain.trim(), &hash).unwrap());
    }

    #[test]
    fn plaintext_in_password_column_is_an_error() {
        let err = verify_password("joepassword", "joepassword").unwrap_err();
        assert!(err.to_string().contains("not a PHC hash"));
    }
}
