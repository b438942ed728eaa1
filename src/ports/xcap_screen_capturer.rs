use anyhow::{Context, Result};

use crate::core::interfaces::ports::ScreenCapturer;
use crate::core::models::ImageInput;
use crate::global_constants::LOG_TAG_CAPTURE;

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn find_primary_monitor(&self) -> Result<xcap::Monitor> {
        let monitors = xcap::Monitor::all().context("failed to enumerate monitors")?;
        log::debug!("{} found {} monitors", LOG_TAG_CAPTURE, monitors.len());

        let mut fallback_monitor = None;
        for monitor in monitors {
            if monitor.is_primary().unwrap_or(false) {
                return Ok(monitor);
            }
            if fallback_monitor.is_none() {
                fallback_monitor = Some(monitor);
            }
        }

        log::warn!(
            "{} no primary monitor reported, using first available",
            LOG_TAG_CAPTURE
        );
        fallback_monitor.ok_or_else(|| anyhow::anyhow!("no monitors available to capture"))
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<xcap::image::RgbaImage> {
        monitor
            .capture_image()
            .context("Unable to capture monitor")
    }

    fn convert_image_to_input(&self, image: xcap::image::RgbaImage) -> ImageInput {
        let width_pixels = image.width();
        let height_pixels = image.height();
        let raw_rgba_data = image.into_raw();

        log::info!(
            "{} captured {}x{} screenshot",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels
        );

        ImageInput::build_from_raw_data(width_pixels, height_pixels, raw_rgba_data)
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn capture_primary_screen(&self) -> Result<ImageInput> {
        log::debug!("{} capturing primary screen", LOG_TAG_CAPTURE);

        let monitor = self.find_primary_monitor()?;
        let captured_image = self.capture_monitor_image(&monitor)?;

        Ok(self.convert_image_to_input(captured_image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_capturer() {
        let capturer = XcapScreenCapturer::initialize();

        assert!(std::mem::size_of_val(&capturer) == 0);
    }

    #[test]
    fn test_convert_image_to_input_keeps_dimensions_and_pixels() {
        let capturer = XcapScreenCapturer::initialize();
        let width = 100u32;
        let height = 50u32;
        let raw_data = vec![42u8; (width * height * 4) as usize];
        let image = xcap::image::RgbaImage::from_raw(width, height, raw_data).unwrap();

        let input = capturer.convert_image_to_input(image);

        assert_eq!(input.width, width);
        assert_eq!(input.height, height);
        assert_eq!(input.raw_data().len(), (width * height * 4) as usize);
        assert!(!input.is_empty());
    }
}
