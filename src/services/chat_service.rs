use crate::error::Result;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Stateless pass-through to the Google Generative Language text endpoint.
#[derive(Clone)]
pub struct ChatService {
    client: Client,
    api_key: String,
    model: String,
}

impl ChatService {
    pub fn new(api_key: String, model: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }

    pub async fn generate_reply(&self, message: &str) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta2/{}:generateText",
            self.model
        );

        let payload = serde_json::json!({
            "prompt": { "text": message },
            "temperature": 0.2,
            "maxOutputTokens": 512,
        });

        let res = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .timeout(Duration::from_secs(60))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Generative API error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;
        Self::extract_reply(&body)
            .ok_or_else(|| anyhow::anyhow!("Invalid generative API response format").into())
    }

    /// The generated text lives at different paths depending on the model
    /// generation; try the known shapes in order.
    fn extract_reply(body: &JsonValue) -> Option<String> {
        if let Some(content) = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
        {
            if let Some(parts) = content.as_array() {
                let reply: String = parts
                    .iter()
                    .map(|p| p.get("text").and_then(|t| t.as_str()).unwrap_or_default())
                    .collect();
                return Some(reply);
            }
            if let Some(text) = content.get("text").and_then(|t| t.as_str()) {
                return Some(text.to_string());
            }
            if let Some(text) = content.as_str() {
                return Some(text.to_string());
            }
        }

        if let Some(parts) = body
            .get("output")
            .and_then(|o| o.get(0))
            .and_then(|o| o.get("content"))
            .and_then(|c| c.as_array())
        {
            let reply: String = parts
                .iter()
                .map(|p| p.get("text").and_then(|t| t.as_str()).unwrap_or_default())
                .collect();
            return Some(reply.trim().to_string());
        }

        body.get("generatedText")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string())
    }
}
