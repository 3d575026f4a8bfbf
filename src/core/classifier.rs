// the relay - prompt in, one boolean per tweet out

use std::sync::Arc;

use clap::ValueEnum;
use tracing::{info, warn};

use super::parse::parse_results;
use super::prompt::DEFAULT_RULE;
use super::provider::{TextClassifierProvider, max_tokens_for};
use crate::Error;

/// What to answer when the model output can't be trusted.
///
/// `Open` treats every tweet as a match so nothing gets hidden. `Closed`
/// treats none as a match, which hides the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailPolicy {
    #[default]
    Open,
    Closed,
}

impl FailPolicy {
    pub fn fallback(self) -> bool {
        matches!(self, FailPolicy::Open)
    }
}

#[derive(Clone)]
pub struct Classifier {
    provider: Arc<dyn TextClassifierProvider>,
    policy: FailPolicy,
}

impl Classifier {
    pub fn new(provider: Arc<dyn TextClassifierProvider>, policy: FailPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn policy(&self) -> FailPolicy {
        self.policy
    }

    /// Classify `items` against `rule` (or the default rule).
    ///
    /// The result always has one entry per item, in order.
    pub async fn classify(&self, items: &[String], rule: Option<&str>) -> Result<Vec<bool>, Error> {
        if items.is_empty() {
            return Err(Error::NoItems);
        }

        let rule = rule.unwrap_or(DEFAULT_RULE);
        let prompt = self.provider.build_prompt(items, rule);

        let text = match self
            .provider
            .invoke(&prompt, max_tokens_for(items.len()))
            .await
        {
            Ok(text) => text,
            Err(Error::ContentFiltered(reason)) => {
                // a moderation trip says nothing about the rule, keep the batch visible
                warn!(
                    provider = self.provider.name(),
                    count = items.len(),
                    %reason,
                    "content filter triggered, keeping all tweets"
                );
                return Ok(vec![true; items.len()]);
            }
            Err(e) => return Err(e),
        };

        let results = parse_results(text.as_deref(), items.len(), self.policy.fallback());
        info!(
            provider = self.provider.name(),
            count = items.len(),
            matched = results.iter().filter(|m| **m).count(),
            "classified batch"
        );

        Ok(results)
    }
}
