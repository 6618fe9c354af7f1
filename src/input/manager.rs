//! Routes each exam paper to the extractor for its format

use crate::error::{ExamOverlapError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Extracted text keyed by path, so a paper compared with itself is read once.
#[derive(Default)]
pub struct InputManager {
    papers: HashMap<PathBuf, String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.papers.get(path) {
            debug!("Reusing extracted text for {}", path.display());
            return Ok(text.clone());
        }

        if !path.exists() {
            return Err(ExamOverlapError::InvalidInput(format!(
                "Exam paper does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path).ok_or_else(|| {
            ExamOverlapError::InvalidInput(format!("Exam paper has no extension: {}", path.display()))
        })?;

        info!("Reading {:?} exam paper {}", file_type, path.display());
        let text = match file_type {
            FileType::Pdf => PdfExtractor.extract(path).await?,
            FileType::Text => PlainTextExtractor.extract(path).await?,
            FileType::Markdown => MarkdownExtractor.extract(path).await?,
            FileType::Unknown => {
                return Err(ExamOverlapError::UnsupportedFormat(format!(
                    "Unsupported exam paper format: {}",
                    path.display()
                )));
            }
        };

        self.papers.insert(path.to_path_buf(), text.clone());
        Ok(text)
    }

    /// Number of papers already extracted.
    pub fn cache_size(&self) -> usize {
        self.papers.len()
    }
}
