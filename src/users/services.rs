use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use regex::Regex;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::users::repo::User;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Creates a user, rejecting duplicate emails. Email comparison is exact;
/// the unique index on `users.email` backs this check under concurrency.
pub async fn register_user(db: &PgPool, email: &str, password: &str) -> Result<User, ApiError> {
    if !is_valid_email(email) {
        return Err(ApiError::validation("Invalid email"));
    }
    if password.len() < 8 {
        return Err(ApiError::validation("Password too short"));
    }

    if User::find_by_email(db, email).await?.is_some() {
        return Err(ApiError::conflict("Email already exists"));
    }

    let hash = hash_password(password)?;
    User::create(db, email, &hash)
        .await
        .map_err(|e| ApiError::unique_violation(e, "Email already exists"))
}

/// Returns the user matching the credentials, or `None` for an unknown
/// email or a wrong password. The two cases are indistinguishable.
pub async fn login(db: &PgPool, email: &str, password: &str) -> Result<Option<User>, ApiError> {
    let Some(user) = User::find_by_email(db, email).await? else {
        return Ok(None);
    };
    if verify_password(password, &user.password_hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, ApiError> {
    User::find_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))
}

#[cfg(test)]
mod password_tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}

#[cfg(test)]
mod email_tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("organizer@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}
