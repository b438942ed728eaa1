use std::fmt;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Completed(String),
    MissingInput,
    ContentBlocked { reason: String },
    ServiceFault,
}

impl AnalysisResult {
    pub fn content_blocked(block_reason: Option<&str>) -> Self {
        AnalysisResult::ContentBlocked {
            reason: describe_block_reason(block_reason),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, AnalysisResult::Completed(_))
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisResult::Completed(text) => write!(f, "{}", text),
            AnalysisResult::MissingInput => write!(f, "{}", global_constants::MESSAGE_MISSING_IMAGE),
            AnalysisResult::ContentBlocked { reason } => write!(
                f,
                "{}Reason provided by the API: **{}**",
                global_constants::MESSAGE_ANALYSIS_BLOCKED,
                reason
            ),
            AnalysisResult::ServiceFault => write!(f, "{}", global_constants::MESSAGE_SERVICE_FAULT),
        }
    }
}

/// `PROHIBITED_CONTENT` reads as "prohibited content". Absent or
/// unspecified codes read as "unknown".
pub fn describe_block_reason(block_reason: Option<&str>) -> String {
    match block_reason.map(str::trim) {
        Some(code) if !code.is_empty() && code != global_constants::BLOCK_REASON_UNSPECIFIED => {
            code.to_lowercase().replace('_', " ")
        }
        _ => global_constants::BLOCK_REASON_UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_displays_text_unmodified() {
        let result = AnalysisResult::Completed("**Bold** text\n".to_string());

        assert_eq!(result.to_string(), "**Bold** text\n");
        assert!(result.is_completed());
    }

    #[test]
    fn test_missing_input_displays_instruction() {
        let text = AnalysisResult::MissingInput.to_string();

        assert!(text.starts_with("Please provide an image"));
    }

    #[test]
    fn test_blocked_message_names_reason() {
        let text = AnalysisResult::content_blocked(Some("SAFETY")).to_string();

        assert!(text.contains("Analysis Blocked"));
        assert!(text.contains("**safety**"));
    }

    #[test]
    fn test_describe_block_reason_replaces_underscores() {
        assert_eq!(
            describe_block_reason(Some("PROHIBITED_CONTENT")),
            "prohibited content"
        );
    }

    #[test]
    fn test_describe_block_reason_defaults_to_unknown() {
        assert_eq!(describe_block_reason(None), "unknown");
        assert_eq!(describe_block_reason(Some("")), "unknown");
        assert_eq!(describe_block_reason(Some("BLOCK_REASON_UNSPECIFIED")), "unknown");
    }

    #[test]
    fn test_service_fault_displays_retry_message() {
        assert_eq!(
            AnalysisResult::ServiceFault.to_string(),
            "An error occurred while communicating with the AI. Please try again."
        );
        assert!(!AnalysisResult::ServiceFault.is_completed());
    }
}
