use anyhow::Result;

use crate::core::models::ImageInput;

pub trait ClipboardPort: Send + Sync {
    fn read_image(&self) -> Result<ImageInput>;
    fn copy_text(&self, text: &str) -> Result<()>;
}
