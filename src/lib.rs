// xfilter library - classify tweets against a plain english rule

pub mod cli;
pub mod config;
mod core;
mod error;
mod output;
mod server;

pub use crate::core::{
    AzureOpenAi, Classifier, DEFAULT_RULE, FailPolicy, Gemini, INSTRUCTION, Prompt, Provider,
    TOKENS_PER_ITEM, TextClassifierProvider, max_tokens_for, parse_results, sanitize,
};
pub use error::Error;
pub use server::Server;
