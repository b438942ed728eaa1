mod vision_inference_service;

pub use vision_inference_service::VisionInferenceService;
