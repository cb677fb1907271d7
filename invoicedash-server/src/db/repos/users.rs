//! User lookup for sign-in

use invoicedash_core::models::User;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::db::DataError;

pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a user by email. `None` when no row matches.
    pub async fn find(&self, email: &str) -> Result<Option<User>, DataError> {
        let row = sqlx::query("SELECT id, name, email, password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.pool)
            .await
            .map_err(DataError::User.masking())?;

        row.as_ref()
            .map(decode_user)
            .transpose()
            .map_err(DataError::User.masking())
    }

    /// Look up a user by email; a missing user is an error.
    pub async fn get(&self, email: &str) -> Result<User, DataError> {
        require_user(self.find(email).await?)
    }
}

/// The lookup key stays out of the log line.
fn require_user(found: Option<User>) -> Result<User, DataError> {
    found.ok_or_else(|| DataError::User.masking()("no matching user"))
}

fn decode_user(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
    })
}
