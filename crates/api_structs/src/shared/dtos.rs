use serde::{Deserialize, Serialize};

/// Plain message body, used for confirmations and for every error response
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MessageDTO {
    pub message: String,
}

impl MessageDTO {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }
}
