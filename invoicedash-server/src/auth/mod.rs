//! Sign-in credential check
//!
//! Deny by default: only a well-formed email/password pair whose password
//! verifies against the stored hash yields a user. Everything else is
//! `Ok(None)`. Only a failed lookup is an error.

pub mod password;

use invoicedash_core::models::{Credentials, User};
use sqlx::PgPool;

use crate::db::{DataError, UserRepo};

pub use password::{hash_password, verify_password, PasswordError};

/// Decide whether `email`/`password` may sign in.
pub async fn authorize(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, DataError> {
    let credentials = match Credentials::parse(email, password) {
        Ok(credentials) => credentials,
        Err(err) => {
            tracing::info!(reason = %err, "Invalid credentials");
            return Ok(None);
        }
    };

    let Some(user) = UserRepo::new(pool).find(&credentials.email).await? else {
        tracing::info!("Invalid credentials");
        return Ok(None);
    };

    Ok(check_password(user, &credentials.password))
}

/// Keep `user` only if `password` matches its stored hash.
fn check_password(user: User, password: &str) -> Option<User> {
    match verify_password(password, &user.password) {
        Ok(true) => Some(user),
        Ok(false) => {
            tracing::info!("Invalid credentials");
            None
        }
        Err(err) => {
            tracing::warn!(user_id = %user.id, error = %err, "Stored password hash is unusable");
            None
        }
    }
}
