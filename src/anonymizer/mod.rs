use crate::Result;
use crate::ner::EntityTagger;
use std::sync::Arc;

/// Placeholder substituted for every token of a person's name.
pub const PLACEHOLDER: &str = "REDACTED";

/// Replaces person-name tokens in free text with [`PLACEHOLDER`], leaving
/// every other token intact.
pub struct Anonymizer {
    tagger: Arc<dyn EntityTagger>,
}

impl Anonymizer {
    pub fn new(tagger: Arc<dyn EntityTagger>) -> Self {
        Self { tagger }
    }

    /// Anonymizes `text` and rejoins the model's tokens with single spaces.
    ///
    /// The output follows the model's tokenization, not the caller's
    /// original whitespace, so spacing is not preserved byte-for-byte.
    /// Empty or whitespace-only input returns an empty string without
    /// invoking the model.
    pub async fn anonymize(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let tokens = self.tagger.tag(text).await?;

        let redacted: Vec<&str> = tokens
            .iter()
            .map(|token| {
                if token.is_person() {
                    PLACEHOLDER
                } else {
                    token.text.as_str()
                }
            })
            .collect();

        Ok(redacted.join(" "))
    }
}
