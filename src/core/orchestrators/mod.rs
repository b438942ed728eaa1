pub mod app_orchestrator;
mod image_analyzer;

pub use image_analyzer::ImageAnalyzer;
