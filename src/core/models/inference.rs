pub const PNG_MIME_TYPE: &str = "image/png";

#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub prompt: String,
    pub image_bytes: Vec<u8>,
    pub mime_type: String,
}

impl InferenceRequest {
    pub fn with_png_image(prompt: &str, png_bytes: Vec<u8>) -> Self {
        Self {
            prompt: prompt.to_string(),
            image_bytes: png_bytes,
            mime_type: PNG_MIME_TYPE.to_string(),
        }
    }
}

/// What the inference service sent back. No text parts means the output
/// was suppressed, usually with a block reason code attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferenceResponse {
    pub text_parts: Vec<String>,
    pub block_reason: Option<String>,
}

impl InferenceResponse {
    #[cfg(test)]
    pub fn with_text(text: &str) -> Self {
        Self {
            text_parts: vec![text.to_string()],
            block_reason: None,
        }
    }

    #[cfg(test)]
    pub fn blocked(block_reason: Option<&str>) -> Self {
        Self {
            text_parts: Vec::new(),
            block_reason: block_reason.map(str::to_string),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.text_parts.is_empty()
    }

    pub fn combined_text(&self) -> String {
        self.text_parts.concat()
    }
}
