//! Input processing module
//! Handles media type detection, text extraction, and file loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::MediaType;
pub use manager::{InputManager, UploadedFile};
pub use text_extractor::{extract_text, ExtractedDocument};
