// gemini generateContent, either the public api or vertex ai

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::Prompt;
use super::provider::TextClassifierProvider;
use crate::Error;
use crate::config::{GeminiAuth, GeminiConfig};

// finish reasons that mean the model refused on policy grounds
const BLOCKED_FINISH_REASONS: [&str; 4] = ["SAFETY", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

pub struct Gemini {
    client: reqwest::Client,
    config: GeminiConfig,
    endpoint: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

impl Gemini {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }
}

#[async_trait]
impl TextClassifierProvider for Gemini {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn invoke(&self, prompt: &Prompt, max_tokens: u32) -> Result<Option<String>, Error> {
        // no system role here, instruction and body go in one part
        let request = Request {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_text(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                top_p: 1.0,
                max_output_tokens: max_tokens,
            },
        };

        debug!(model = %self.config.model, max_tokens, "calling gemini");

        let builder = self.client.post(&self.endpoint).json(&request);
        let builder = match &self.config.auth {
            GeminiAuth::ApiKey(key) => builder.header("x-goog-api-key", key),
            GeminiAuth::Vertex { access_token, .. } => builder.bearer_auth(access_token),
        };

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or(text);
            return Err(Error::Provider {
                provider: "Gemini",
                status: status.as_u16(),
                message,
            });
        }

        let response: Response = response.json().await?;

        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(Error::ContentFiltered(format!("prompt blocked: {reason}")));
        }

        let Some(candidate) = response.candidates.into_iter().next() else {
            return Ok(None);
        };

        if let Some(reason) = candidate.finish_reason.as_deref()
            && BLOCKED_FINISH_REASONS.contains(&reason)
        {
            return Err(Error::ContentFiltered(format!("response blocked: {reason}")));
        }

        let text: String = candidate
            .content
            .unwrap_or_default()
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();

        Ok(Some(text).filter(|t| !t.is_empty()))
    }
}
