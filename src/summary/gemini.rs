// Gemini generateContent implementation.
//
// Sends the headline batch as a single prompt and returns the first
// candidate's text. Wrapped behind the Summarizer trait so the provider can
// be swapped without touching callers.
//
// API docs: https://ai.google.dev/api/generate-content

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Summarizer;

const MODEL: &str = "gemini-1.5-flash";

/// Gemini API summarizer.
pub struct GeminiSummarizer {
    client: Client,
    api_key: String,
}

impl GeminiSummarizer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, headlines: &[String]) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            MODEL, self.api_key
        );

        let prompt = format!(
            "Summarize today's news in three to four sentences based on these headlines:\n{}",
            headlines.join("\n")
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to call Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned {}: {}", status, body);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .context("Gemini response contained no candidates")?;

        debug!(headlines = headlines.len(), chars = text.len(), "Summary generated");
        Ok(text)
    }
}

// --- Gemini API request/response types ---

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
