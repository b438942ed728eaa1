pub const APPLICATION_TITLE: &str = "Image to Text AI";
pub const CONFIG_ERROR_WINDOW_TITLE: &str = "Image to Text AI - Configuration Error";

pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_MODEL_NAME: &str = "GEMINI_MODEL";
pub const ENV_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
pub const ENV_THEME: &str = "APP_THEME";

pub const DEFAULT_MODEL_NAME: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";

pub const BLOCK_REASON_UNSPECIFIED: &str = "BLOCK_REASON_UNSPECIFIED";
pub const BLOCK_REASON_UNKNOWN: &str = "unknown";

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff", "tif"];

pub const MESSAGE_MISSING_IMAGE: &str = "Please provide an image first by uploading a file, pasting from the clipboard, or capturing your screen.";
pub const MESSAGE_SERVICE_FAULT: &str =
    "An error occurred while communicating with the AI. Please try again.";
pub const MESSAGE_ANALYSIS_BLOCKED: &str = "❌ **Analysis Blocked** ❌\n\n\
The image could not be processed. This is likely because it was flagged for a safety reason \
(e.g., it may contain inappropriate content).\n\n";

pub const OUTPUT_PLACEHOLDER: &str = "The AI's analysis will appear here...";

pub const CAPTURE_SOURCE_HINT: &str =
    "Captures your primary screen in place of a webcam photo";

pub const STATUS_READY: &str = "Ready - upload, paste or capture an image";
pub const STATUS_ANALYZING: &str = "Analyzing...";

pub const CONFIG_ERROR_HEADING: &str = "ERROR: Missing Google API Key";
pub const CONFIG_ERROR_INSTRUCTIONS: &str =
    "Please create a `.env` file and add your `GOOGLE_API_KEY` to it, then restart the application.";

pub const ANALYSIS_PROMPT: &str = r#"
You are an expert image analyst. Your task is to analyze the provided image and give a structured response with three distinct parts.
Your response must use Markdown for formatting (e.g., **bold** headings).

1.  **Detailed Description:**
    Provide a detailed, multi-sentence paragraph describing the image. Mention the main subject, the setting, colors, mood, and any important details.

2.  **Origin & Location Identification:**
    Analyze if the image contains a recognizable real-world landmark, or if it is a famous piece of art, photograph, or internet meme. If you identify a specific place or work, state its name and origin (e.g., "Eiffel Tower, Paris, France" or "The Mona Lisa by Leonardo da Vinci"). If it's a generic scene, state "This appears to be a generic location or object."

3.  **AI Generation Analysis:**
    Carefully examine the image for signs of being AI-generated (e.g., unnatural textures, errors in details like hands or text, overly perfect composition). Provide your estimation as a percentage of the likelihood that this image was created by an AI. Format your answer exactly as: "**AI Generation Likelihood:** [a number between 0 and 100]%".
"#;
