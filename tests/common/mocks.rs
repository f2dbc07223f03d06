use async_trait::async_trait;
use redactor::{
    Error, Result,
    ner::{EntityTagger, TaggedToken},
};
use std::sync::{Arc, Mutex};

/// Mock entity tagger for testing
///
/// Queued responses are returned in order; once the queue is empty the mock
/// falls back to whitespace tokenization with every token labeled `"O"`.
pub struct MockTagger {
    pub responses: Arc<Mutex<Vec<Vec<TaggedToken>>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockTagger {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Vec<TaggedToken>>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[async_trait]
impl EntityTagger for MockTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        self.requests.lock().unwrap().push(text.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::model(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(text
                .split_whitespace()
                .map(|token| TaggedToken::new(token, "O"))
                .collect());
        }
        Ok(responses.remove(0))
    }
}

/// Builds tagged tokens from (text, label) pairs
pub fn tokens(tagged: &[(&str, &str)]) -> Vec<TaggedToken> {
    tagged
        .iter()
        .map(|(text, label)| TaggedToken::new(*text, *label))
        .collect()
}
