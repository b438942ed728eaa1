mod clipboard_port;
mod image_analysis_port;
mod image_file_picker;
mod screen_capturer;

pub use clipboard_port::ClipboardPort;
pub use image_analysis_port::ImageAnalysisPort;
pub use image_file_picker::ImageFilePicker;
pub use screen_capturer::ScreenCapturer;
