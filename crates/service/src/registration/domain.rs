use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration payload as received from the HTTP layer. The plaintext
/// password is transient and never persisted or logged.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Persisted user as seen by the service layer. `tasks` carries the ids of
/// the user's to-do items, empty at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub tasks: Vec<Uuid>,
}
