mod bert;
mod types;

pub use bert::BertTagger;
pub use types::TaggedToken;

use crate::Result;
use async_trait::async_trait;

/// Opaque interface to the named-entity recognition model.
///
/// Implementations return one entry per token of the model's own
/// tokenization, including tokens that belong to no entity (label `"O"`).
#[async_trait]
pub trait EntityTagger: Send + Sync {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;
}
