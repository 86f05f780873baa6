use super::provider::{ProviderError, ProviderId, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";

pub struct DeepseekProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DeepseekProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TextProvider for DeepseekProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Deepseek
    }

    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let body = json!({
            "model": "deepseek-chat",
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": 0.7,
            "max_tokens": 3000,
            "stream": false
        });

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status().as_u16()));
        }

        let data: Value = resp.json().await?;
        data["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(ProviderError::Malformed("missing choices[0].message.content"))
    }
}
