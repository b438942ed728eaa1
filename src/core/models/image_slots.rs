use std::fmt;

use crate::core::models::ImageInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Upload,
    Clipboard,
    ScreenCapture,
}

impl ImageSource {
    pub fn slot(&self) -> ImageSlot {
        match self {
            ImageSource::Upload | ImageSource::Clipboard => ImageSlot::Upload,
            ImageSource::ScreenCapture => ImageSlot::Capture,
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Upload => write!(f, "file upload"),
            ImageSource::Clipboard => write!(f, "clipboard"),
            ImageSource::ScreenCapture => write!(f, "screen capture"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Upload,
    Capture,
}

/// Holds the image picked by each input control. Upload and clipboard
/// paste share one slot, screen capture has its own.
#[derive(Debug, Clone, Default)]
pub struct ImageSlots {
    upload: Option<ImageInput>,
    capture: Option<ImageInput>,
}

impl ImageSlots {
    pub fn place(&mut self, source: ImageSource, image: ImageInput) {
        log::debug!(
            "[IMAGE_SLOTS] placing {}x{} image from {} into {:?} slot",
            image.width,
            image.height,
            source,
            source.slot()
        );

        match source.slot() {
            ImageSlot::Upload => self.upload = Some(image),
            ImageSlot::Capture => self.capture = Some(image),
        }
    }

    pub fn clear(&mut self, slot: ImageSlot) {
        match slot {
            ImageSlot::Upload => self.upload = None,
            ImageSlot::Capture => self.capture = None,
        }
    }

    pub fn get(&self, slot: ImageSlot) -> Option<&ImageInput> {
        match slot {
            ImageSlot::Upload => self.upload.as_ref(),
            ImageSlot::Capture => self.capture.as_ref(),
        }
    }

    // upload wins over capture when both are populated
    pub fn select_for_analysis(&self) -> Option<ImageInput> {
        [self.upload.as_ref(), self.capture.as_ref()]
            .into_iter()
            .flatten()
            .find(|image| !image.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> ImageInput {
        ImageInput::build_from_raw_data(width, height, vec![0u8; (width * height * 4) as usize])
    }

    #[test]
    fn test_clipboard_and_upload_share_a_slot() {
        assert_eq!(ImageSource::Upload.slot(), ImageSlot::Upload);
        assert_eq!(ImageSource::Clipboard.slot(), ImageSlot::Upload);
        assert_eq!(ImageSource::ScreenCapture.slot(), ImageSlot::Capture);
    }

    #[test]
    fn test_empty_slots_select_nothing() {
        let slots = ImageSlots::default();

        assert!(slots.select_for_analysis().is_none());
    }

    #[test]
    fn test_upload_slot_wins_when_both_populated() {
        let mut slots = ImageSlots::default();
        slots.place(ImageSource::ScreenCapture, create_test_image(8, 8));
        slots.place(ImageSource::Upload, create_test_image(2, 2));

        let selected = slots.select_for_analysis().unwrap();

        assert_eq!(selected.width, 2);
    }

    #[test]
    fn test_capture_slot_used_when_upload_empty() {
        let mut slots = ImageSlots::default();
        slots.place(ImageSource::ScreenCapture, create_test_image(8, 8));

        let selected = slots.select_for_analysis().unwrap();

        assert_eq!(selected.width, 8);
    }

    #[test]
    fn test_zero_sized_upload_falls_through_to_capture() {
        let mut slots = ImageSlots::default();
        slots.place(ImageSource::Upload, ImageInput::build_from_raw_data(0, 0, Vec::new()));
        slots.place(ImageSource::ScreenCapture, create_test_image(4, 4));

        let selected = slots.select_for_analysis().unwrap();

        assert_eq!(selected.width, 4);
    }

    #[test]
    fn test_clipboard_paste_replaces_uploaded_image() {
        let mut slots = ImageSlots::default();
        slots.place(ImageSource::Upload, create_test_image(2, 2));
        slots.place(ImageSource::Clipboard, create_test_image(6, 6));

        assert_eq!(slots.get(ImageSlot::Upload).unwrap().width, 6);
    }

    #[test]
    fn test_clear_removes_only_requested_slot() {
        let mut slots = ImageSlots::default();
        slots.place(ImageSource::Upload, create_test_image(2, 2));
        slots.place(ImageSource::ScreenCapture, create_test_image(4, 4));

        slots.clear(ImageSlot::Upload);

        assert!(slots.get(ImageSlot::Upload).is_none());
        assert!(slots.get(ImageSlot::Capture).is_some());
    }
}
