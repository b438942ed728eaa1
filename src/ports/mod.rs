mod arboard_clipboard;
mod rfd_image_file_picker;
mod xcap_screen_capturer;

pub use arboard_clipboard::ArboardClipboard;
pub use rfd_image_file_picker::RfdImageFilePicker;
pub use xcap_screen_capturer::XcapScreenCapturer;
