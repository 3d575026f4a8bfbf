// provider seam - anything that can answer a classification prompt

use std::sync::Arc;

use async_trait::async_trait;

use super::azure::AzureOpenAi;
use super::gemini::Gemini;
use super::prompt::Prompt;
use crate::Error;

/// Output budget per tweet; each answer is a short "k. YES" line.
pub const TOKENS_PER_ITEM: u32 = 5;

/// A hosted model that can classify a batch of tweets.
///
/// Implementations make exactly one call per `invoke`. A moderation refusal
/// must come back as [`Error::ContentFiltered`] so the relay can fail open.
#[async_trait]
pub trait TextClassifierProvider: Send + Sync {
    fn name(&self) -> &str;

    fn build_prompt(&self, items: &[String], rule: &str) -> Prompt {
        Prompt::new(items, rule)
    }

    /// Returns the raw model text, or `None` if the model produced none.
    async fn invoke(&self, prompt: &Prompt, max_tokens: u32) -> Result<Option<String>, Error>;
}

pub fn max_tokens_for(count: usize) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(TOKENS_PER_ITEM)
}

/// Which hosted model backs the relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Provider {
    /// azure openai chat completions
    #[default]
    Azure,
    /// gemini generateContent
    Gemini,
}

impl Provider {
    /// Build the client from environment settings.
    pub fn connect(self) -> Result<Arc<dyn TextClassifierProvider>, Error> {
        let provider: Arc<dyn TextClassifierProvider> = match self {
            Provider::Azure => Arc::new(AzureOpenAi::from_env()?),
            Provider::Gemini => Arc::new(Gemini::from_env()?),
        };
        Ok(provider)
    }
}
