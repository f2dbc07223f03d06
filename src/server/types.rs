use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnonymizeRequest {
    #[serde(default)]
    pub text: String,
}

/// Chat-completion style envelope. The shape is a fixed compatibility
/// contract with the frontend client; it is reproduced verbatim and never
/// extended with additional choices or metadata.
#[derive(Debug, Serialize)]
pub struct AnonymizeResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub content: String,
}

impl AnonymizeResponse {
    pub fn new(content: String) -> Self {
        Self {
            choices: vec![Choice {
                message: Message { content },
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
