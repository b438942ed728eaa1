mod gemini_vision_service;

pub use gemini_vision_service::GeminiVisionService;
