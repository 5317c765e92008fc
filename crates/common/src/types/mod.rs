use serde::{Deserialize, Serialize};

/// Uniform `{ message }` JSON body returned by every endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
