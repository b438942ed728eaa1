use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::interfaces::adapters::VisionInferenceService;
use crate::core::models::{AppConfig, InferenceRequest, InferenceResponse};
use crate::global_constants;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

pub struct GeminiVisionService {
    http_client: reqwest::Client,
    api_key: String,
    model_name: String,
    api_base_url: String,
}

impl GeminiVisionService {
    pub fn from_config(config: &AppConfig) -> Self {
        log::info!(
            "[GEMINI] Initializing Gemini vision service with model {}",
            config.model_name
        );

        Self {
            http_client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model_name: config.model_name.clone(),
            api_base_url: config.api_base_url.clone(),
        }
    }

    fn build_endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model_name
        )
    }

    fn build_request_body(request: &InferenceRequest) -> GenerateContentRequest {
        let encoded_image = base64::engine::general_purpose::STANDARD.encode(&request.image_bytes);

        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart::Text {
                        text: request.prompt.clone(),
                    },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: request.mime_type.clone(),
                            data: encoded_image,
                        },
                    },
                ],
            }],
        }
    }

    fn parse_response_body(response_text: &str) -> Result<InferenceResponse> {
        let parsed: GenerateContentResponse = serde_json::from_str(response_text)
            .context("Failed to decode Gemini generateContent response")?;

        let text_parts = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        let block_reason = parsed
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);

        Ok(InferenceResponse {
            text_parts,
            block_reason,
        })
    }
}

#[async_trait]
impl VisionInferenceService for GeminiVisionService {
    async fn generate_content(&self, request: &InferenceRequest) -> Result<InferenceResponse> {
        let endpoint_url = self.build_endpoint_url();
        log::info!(
            "[GEMINI] Sending generateContent request ({} image bytes)",
            request.image_bytes.len()
        );
        log::debug!("[GEMINI] Endpoint: {}", endpoint_url);

        let body = Self::build_request_body(request);

        let response = self
            .http_client
            .post(&endpoint_url)
            .header(global_constants::GEMINI_API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to reach Gemini API")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read Gemini response body")?;

        if !status.is_success() {
            log::debug!("[GEMINI] Error response body: {}", response_text);
            anyhow::bail!("Gemini API returned status {}: {}", status, response_text);
        }

        let inference_response = Self::parse_response_body(&response_text)?;
        log::info!(
            "[GEMINI] Received {} text parts, block reason: {:?}",
            inference_response.text_parts.len(),
            inference_response.block_reason
        );

        Ok(inference_response)
    }
}
