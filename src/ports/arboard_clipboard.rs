use anyhow::{Context, Result};

use crate::core::interfaces::ports::ClipboardPort;
use crate::core::models::ImageInput;

pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open_clipboard() -> Result<arboard::Clipboard> {
        arboard::Clipboard::new().context("Failed to initialize clipboard")
    }

    fn convert_image_data_to_input(image_data: arboard::ImageData<'_>) -> Result<ImageInput> {
        let width = u32::try_from(image_data.width).context("Clipboard image is too wide")?;
        let height = u32::try_from(image_data.height).context("Clipboard image is too tall")?;
        let expected_length = image_data.width * image_data.height * 4;

        if image_data.bytes.len() != expected_length {
            anyhow::bail!(
                "Clipboard image has {} bytes, expected {} for {}x{} RGBA",
                image_data.bytes.len(),
                expected_length,
                width,
                height
            );
        }

        Ok(ImageInput::build_from_raw_data(
            width,
            height,
            image_data.bytes.into_owned(),
        ))
    }
}

impl ClipboardPort for ArboardClipboard {
    fn read_image(&self) -> Result<ImageInput> {
        log::info!("[CLIPBOARD] Reading image from clipboard");

        let mut clipboard = Self::open_clipboard()?;
        let image_data = clipboard
            .get_image()
            .context("No image found on the clipboard")?;

        log::debug!(
            "[CLIPBOARD] Clipboard image: {}x{}",
            image_data.width,
            image_data.height
        );
        Self::convert_image_data_to_input(image_data)
    }

    fn copy_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Self::open_clipboard()?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to copy text to clipboard")?;

        log::info!("[CLIPBOARD] Copied {} characters to clipboard", text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_convert_image_data_to_input_keeps_pixels() {
        let image_data = arboard::ImageData {
            width: 2,
            height: 3,
            bytes: Cow::Owned(vec![7u8; 2 * 3 * 4]),
        };

        let input = ArboardClipboard::convert_image_data_to_input(image_data).unwrap();

        assert_eq!(input.width, 2);
        assert_eq!(input.height, 3);
        assert_eq!(input.raw_data(), &[7u8; 24][..]);
    }

    #[test]
    fn test_convert_image_data_rejects_short_buffer() {
        let image_data = arboard::ImageData {
            width: 10,
            height: 10,
            bytes: Cow::Owned(vec![0u8; 16]),
        };

        let result = ArboardClipboard::convert_image_data_to_input(image_data);

        assert!(result.is_err());
    }
}
