mod analysis_result;
mod app_config;
mod image_input;
mod image_slots;
mod inference;
mod theme_mode;

pub use analysis_result::AnalysisResult;
pub use app_config::{AppConfig, ConfigError};
pub use image_input::ImageInput;
pub use image_slots::{ImageSlot, ImageSlots, ImageSource};
pub use inference::{InferenceRequest, InferenceResponse};
pub use theme_mode::ThemeMode;
