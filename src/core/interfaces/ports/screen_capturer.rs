use anyhow::Result;

use crate::core::models::ImageInput;

pub trait ScreenCapturer: Send + Sync {
    fn capture_primary_screen(&self) -> Result<ImageInput>;
}
