use serde::Serialize;
use uuid::Uuid;

/// Dashboard user as stored in `users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// PHC-format password hash
    #[serde(skip_serializing)]
    pub password: String,
}
