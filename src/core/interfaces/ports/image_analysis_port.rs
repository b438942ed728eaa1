use async_trait::async_trait;

use crate::core::models::{AnalysisResult, ImageInput};

#[async_trait]
pub trait ImageAnalysisPort: Send + Sync {
    async fn analyze(&self, image: Option<ImageInput>) -> AnalysisResult;
}
