use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::VisionInferenceService;
use crate::core::interfaces::ports::ImageAnalysisPort;
use crate::core::models::{AnalysisResult, ImageInput, InferenceRequest, InferenceResponse};
use crate::global_constants;

pub struct ImageAnalyzer {
    inference_service: Arc<dyn VisionInferenceService>,
}

impl ImageAnalyzer {
    pub fn new(inference_service: Arc<dyn VisionInferenceService>) -> Self {
        Self { inference_service }
    }

    fn build_inference_request(image: &ImageInput) -> Result<InferenceRequest> {
        let png_bytes = image
            .encode_as_png()
            .context("Failed to prepare image for analysis")?;

        Ok(InferenceRequest::with_png_image(
            global_constants::ANALYSIS_PROMPT,
            png_bytes,
        ))
    }

    fn interpret_response(response: InferenceResponse) -> AnalysisResult {
        if !response.has_content() {
            log::warn!(
                "[ANALYZER] Response contained no content parts, block reason: {:?}",
                response.block_reason
            );
            return AnalysisResult::content_blocked(response.block_reason.as_deref());
        }

        let text = response.combined_text();
        log::info!(
            "[ANALYZER] Analysis complete. Received {} characters",
            text.len()
        );
        AnalysisResult::Completed(text)
    }
}

#[async_trait]
impl ImageAnalysisPort for ImageAnalyzer {
    async fn analyze(&self, image: Option<ImageInput>) -> AnalysisResult {
        let image = match image {
            Some(image) if !image.is_empty() => image,
            _ => {
                log::info!("[ANALYZER] No image supplied, skipping inference call");
                return AnalysisResult::MissingInput;
            }
        };

        log::info!(
            "[ANALYZER] Starting analysis of {}x{} image",
            image.width,
            image.height
        );

        let request = match Self::build_inference_request(&image) {
            Ok(request) => request,
            Err(e) => {
                log::error!("[ANALYZER] An unexpected error occurred: {:#}", e);
                return AnalysisResult::ServiceFault;
            }
        };

        match self.inference_service.generate_content(&request).await {
            Ok(response) => Self::interpret_response(response),
            Err(e) => {
                log::error!("[ANALYZER] An unexpected error occurred: {:#}", e);
                AnalysisResult::ServiceFault
            }
        }
    }
}
