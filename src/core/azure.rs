// azure openai chat completions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::Prompt;
use super::provider::TextClassifierProvider;
use crate::Error;
use crate::config::AzureConfig;

pub struct AzureOpenAi {
    client: reqwest::Client,
    config: AzureConfig,
}

// what we send to azure
#[derive(Serialize)]
struct Request<'a> {
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

// what azure sends back
#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    code: Option<String>,
    #[serde(default)]
    message: String,
    innererror: Option<InnerError>,
}

#[derive(Deserialize)]
struct InnerError {
    code: Option<String>,
}

impl ApiError {
    fn is_content_filter(&self) -> bool {
        self.code.as_deref() == Some("content_filter")
            || self
                .innererror
                .as_ref()
                .and_then(|i| i.code.as_deref())
                == Some("ResponsibleAIPolicyViolation")
    }
}

impl AzureOpenAi {
    pub fn new(config: AzureConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(AzureConfig::from_env()?))
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment
        )
    }
}

#[async_trait]
impl TextClassifierProvider for AzureOpenAi {
    fn name(&self) -> &str {
        "azure"
    }

    async fn invoke(&self, prompt: &Prompt, max_tokens: u32) -> Result<Option<String>, Error> {
        let request = Request {
            messages: vec![
                Message {
                    role: "system",
                    content: prompt.instruction,
                },
                Message {
                    role: "user",
                    content: &prompt.body,
                },
            ],
            temperature: 0.0,
            max_tokens,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        };

        debug!(deployment = %self.config.deployment, max_tokens, "calling azure openai");

        let response = self
            .client
            .post(self.url())
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) if body.error.is_content_filter() => {
                    Error::ContentFiltered(body.error.message)
                }
                Ok(body) if !body.error.message.is_empty() => Error::Provider {
                    provider: "Azure OpenAI",
                    status: status.as_u16(),
                    message: body.error.message,
                },
                _ => Error::Provider {
                    provider: "Azure OpenAI",
                    status: status.as_u16(),
                    message: text,
                },
            });
        }

        let response: Response = response.json().await?;
        let Some(choice) = response.choices.into_iter().next() else {
            return Ok(None);
        };

        // completion withheld by the output filter
        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Err(Error::ContentFiltered(
                "completion blocked by output filter".to_string(),
            ));
        }

        Ok(choice.message.and_then(|m| m.content))
    }
}
