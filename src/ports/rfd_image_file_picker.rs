use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::ImageFilePicker;
use crate::core::models::ImageInput;
use crate::global_constants;

pub struct RfdImageFilePicker;

impl RfdImageFilePicker {
    pub fn new() -> Self {
        Self
    }

    async fn load_image_from_path(path: &std::path::Path) -> Result<ImageInput> {
        let encoded_bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        log::debug!(
            "[FILE_PICKER] Read {} bytes from {:?}",
            encoded_bytes.len(),
            path
        );

        ImageInput::decode_from_encoded_bytes(&encoded_bytes)
            .with_context(|| format!("{} is not a supported image", path.display()))
    }
}

#[async_trait]
impl ImageFilePicker for RfdImageFilePicker {
    async fn pick_image(&self) -> Result<Option<ImageInput>> {
        log::info!("[FILE_PICKER] Opening image file dialog");

        let picked_file = rfd::AsyncFileDialog::new()
            .set_title("Select an Image to Analyze")
            .add_filter("Images", global_constants::SUPPORTED_IMAGE_EXTENSIONS)
            .pick_file()
            .await;

        let Some(file_handle) = picked_file else {
            log::info!("[FILE_PICKER] Dialog dismissed without a selection");
            return Ok(None);
        };

        let path = file_handle.path().to_path_buf();
        log::info!("[FILE_PICKER] Selected {:?}", path);

        let image = Self::load_image_from_path(&path).await?;
        Ok(Some(image))
    }
}
