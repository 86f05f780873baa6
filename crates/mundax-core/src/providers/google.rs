use super::provider::{ProviderError, ProviderId, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

pub const GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";

/// Gemini speaks a `contents` array rather than chat messages, and takes the
/// key as a query parameter rather than an Authorization header.
pub struct GoogleProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TextProvider for GoogleProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Google
    }

    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        // No system turn in this API version; both prompts ride in one part.
        let body = json!({
            "contents": [{
                "parts": [{ "text": format!("{system}\n\n{user}") }]
            }],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 3000,
                "topP": 0.8,
                "topK": 40
            }
        });

        let url = format!(
            "{}/models/gemini-pro:generateContent",
            self.base_url.trim_end_matches('/')
        );
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status().as_u16()));
        }

        let data: Value = resp.json().await?;
        data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(ProviderError::Malformed(
                "missing candidates[0].content.parts[0].text",
            ))
    }
}
