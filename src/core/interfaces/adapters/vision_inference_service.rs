use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{InferenceRequest, InferenceResponse};

/// One multi-part call to a hosted multimodal model. `Err` is reserved for
/// transport and service faults; a suppressed answer is an `Ok` response
/// without text parts.
#[async_trait]
pub trait VisionInferenceService: Send + Sync {
    async fn generate_content(&self, request: &InferenceRequest) -> Result<InferenceResponse>;
}
