// core logic - prompt, providers, parsing and the relay tying them together

mod azure;
mod classifier;
mod gemini;
mod parse;
mod prompt;
mod provider;

pub use azure::AzureOpenAi;
pub use classifier::{Classifier, FailPolicy};
pub use gemini::Gemini;
pub use parse::parse_results;
pub use prompt::{DEFAULT_RULE, INSTRUCTION, Prompt, sanitize};
pub use provider::{Provider, TOKENS_PER_ITEM, TextClassifierProvider, max_tokens_for};
