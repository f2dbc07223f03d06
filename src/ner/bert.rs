use super::types::TaggedToken;
use crate::{Error, Result, ner::EntityTagger};
use async_trait::async_trait;
use rust_bert::pipelines::token_classification::{
    TokenClassificationConfig, TokenClassificationModel,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Entity tagger backed by rust-bert's token classification pipeline
/// (pretrained CoNLL-03 NER model by default).
///
/// The loaded model is not `Sync`, so a dedicated worker thread owns it and
/// serves tagging jobs over a channel. The model is loaded exactly once, at
/// spawn time, and never mutated afterwards; requests are processed one at a
/// time in arrival order.
pub struct BertTagger {
    jobs: mpsc::Sender<TagJob>,
}

struct TagJob {
    text: String,
    reply: oneshot::Sender<Result<Vec<TaggedToken>>>,
}

impl BertTagger {
    /// Loads the pretrained model on a worker thread and resolves once it is
    /// ready to serve. A model that fails to load is fatal to construction.
    pub async fn spawn() -> Result<Self> {
        let (jobs, queue) = mpsc::channel::<TagJob>(32);
        let (ready, loaded) = oneshot::channel();

        std::thread::Builder::new()
            .name("ner-worker".to_string())
            .spawn(move || worker_loop(queue, ready))?;

        loaded
            .await
            .map_err(|_| Error::model("NER worker exited before reporting readiness"))??;

        Ok(Self { jobs })
    }
}

#[async_trait]
impl EntityTagger for BertTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let (reply, response) = oneshot::channel();
        self.jobs
            .send(TagJob {
                text: text.to_string(),
                reply,
            })
            .await
            .map_err(|_| Error::model("NER worker is no longer running"))?;

        response
            .await
            .map_err(|_| Error::model("NER worker dropped the request"))?
    }
}

fn worker_loop(mut queue: mpsc::Receiver<TagJob>, ready: oneshot::Sender<Result<()>>) {
    info!("Loading NER model");

    let model = match TokenClassificationModel::new(TokenClassificationConfig::default()) {
        Ok(model) => {
            let _ = ready.send(Ok(()));
            model
        }
        Err(e) => {
            let _ = ready.send(Err(Error::model(format!("Failed to load NER model: {}", e))));
            return;
        }
    };

    info!("NER model loaded");

    while let Some(job) = queue.blocking_recv() {
        // Sub-tokens are consolidated so word pieces come back as whole
        // words; special tokens ([CLS], [SEP]) are excluded.
        let tokens: Vec<TaggedToken> = model
            .predict(&[job.text.as_str()], true, false)
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(|token| TaggedToken::new(token.text, token.label))
            .collect();

        debug!("Tagged {} tokens", tokens.len());

        let _ = job.reply.send(Ok(tokens));
    }
}
