// provider settings pulled from the environment

use crate::Error;

pub const DEFAULT_AZURE_API_VERSION: &str = "2024-02-01";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite-preview-06-17";
pub const DEFAULT_GEMINI_LOCATION: &str = "global";

#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub api_key: String,
    /// e.g. https://my-resource.openai.azure.com
    pub endpoint: String,
    pub api_version: String,
    pub deployment: String,
}

impl AzureConfig {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            api_key: require("AZURE_OPENAI_API_KEY")?,
            endpoint: require("AZURE_OPENAI_ENDPOINT")?,
            api_version: optional("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string()),
            deployment: require("AZURE_OPENAI_DEPLOYMENT_NAME")?,
        })
    }
}

#[derive(Debug, Clone)]
pub enum GeminiAuth {
    /// generative language api, key passed as a header
    ApiKey(String),
    /// vertex ai, oauth access token for the project
    Vertex {
        project: String,
        location: String,
        access_token: String,
    },
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub auth: GeminiAuth,
    pub model: String,
    /// overrides the host part of the endpoint
    pub base_url: Option<String>,
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self, Error> {
        // api key wins, vertex needs both a project and a token
        let auth = match optional("GEMINI_API_KEY") {
            Some(key) => GeminiAuth::ApiKey(key),
            None => GeminiAuth::Vertex {
                project: require("GOOGLE_CLOUD_PROJECT")?,
                location: optional("GOOGLE_CLOUD_LOCATION")
                    .unwrap_or_else(|| DEFAULT_GEMINI_LOCATION.to_string()),
                access_token: require("GOOGLE_ACCESS_TOKEN")?,
            },
        };

        Ok(Self {
            auth,
            model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: optional("GEMINI_BASE_URL"),
        })
    }

    pub fn endpoint(&self) -> String {
        let model = &self.model;
        match &self.auth {
            GeminiAuth::ApiKey(_) => {
                let base = self
                    .base_url
                    .as_deref()
                    .unwrap_or("https://generativelanguage.googleapis.com");
                format!(
                    "{}/v1beta/models/{model}:generateContent",
                    base.trim_end_matches('/')
                )
            }
            GeminiAuth::Vertex {
                project, location, ..
            } => {
                // the global location has no regional host prefix
                let base = match &self.base_url {
                    Some(b) => b.trim_end_matches('/').to_string(),
                    None if location == "global" => "https://aiplatform.googleapis.com".to_string(),
                    None => format!("https://{location}-aiplatform.googleapis.com"),
                };
                format!(
                    "{base}/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent"
                )
            }
        }
    }
}

fn require(name: &'static str) -> Result<String, Error> {
    optional(name).ok_or(Error::MissingConfig(name))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
