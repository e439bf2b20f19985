//! Input manager: loads uploaded files from disk and extracts their text

use crate::config::InputConfig;
use crate::error::{Result, ResumeCheckerError};
use crate::input::file_detector::MediaType;
use crate::input::text_extractor::extract_document;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// A file as received from the user, together with its extracted text
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub media_type: MediaType,
    pub data: Vec<u8>,
    pub text: String,
}

pub struct InputManager {
    cache: HashMap<String, UploadedFile>,
    enable_cache: bool,
    max_file_size_bytes: u64,
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_caching,
            max_file_size_bytes: config.max_file_size_bytes,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load `path`, taking the media type from `declared` or else the file extension
    pub async fn load(&mut self, path: &Path, declared: Option<MediaType>) -> Result<UploadedFile> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                if declared.map_or(true, |m| m == cached.media_type) {
                    info!("Using cached text for: {}", path.display());
                    return Ok(cached.clone());
                }
            }
        }

        if !path.exists() {
            return Err(ResumeCheckerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let size = fs::metadata(path).await?.len();
        if size > self.max_file_size_bytes {
            return Err(ResumeCheckerError::InvalidInput(format!(
                "File {} is {} bytes, larger than the {} byte limit",
                path.display(),
                size,
                self.max_file_size_bytes
            )));
        }

        let media_type = match declared {
            Some(media_type) => media_type,
            None => self.detect_media_type(path)?,
        };
        if !media_type.is_supported() {
            return Err(ResumeCheckerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        info!("Extracting text from {} ({})", path.display(), media_type);
        let data = fs::read(path).await?;
        let document = extract_document(&data, media_type)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path_str.clone());

        let upload = UploadedFile {
            file_name,
            media_type,
            data,
            text: document.content,
        };
        debug!("Loaded {} ({} bytes)", upload.file_name, upload.data.len());

        if self.enable_cache {
            self.cache.insert(path_str, upload.clone());
        }

        Ok(upload)
    }

    /// Extract only the text of `path`
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        Ok(self.load(path, None).await?.text)
    }

    fn detect_media_type(&self, path: &Path) -> Result<MediaType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeCheckerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(MediaType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
