use serde::{Deserialize, Serialize};

/// A single token from the model's tokenization together with its entity
/// label. Non-entity tokens carry the label `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub label: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    pub fn is_person(&self) -> bool {
        is_person(&self.label)
    }
}

/// Returns true when an entity label marks part of a person's name.
///
/// BIO-style position markers ("B-PER", "I-PER") are stripped before the
/// comparison, so the check works for models that emit them and for models
/// that emit bare labels.
fn is_person(label: &str) -> bool {
    let label = label
        .strip_prefix("B-")
        .or_else(|| label.strip_prefix("I-"))
        .unwrap_or(label);
    matches!(label, "PER" | "PERSON")
}
