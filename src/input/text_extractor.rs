//! Text extraction from various file formats

use crate::error::{ExamOverlapError, Result};
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Text of every page, in page order.
    pub async fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).await?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            ExamOverlapError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        debug!("Extracted {} pages from {}", pages.len(), path.display());
        Ok(pages)
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(self.extract_pages(path).await?.concat())
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Flatten markdown to plain text. Ordered list items get their
    /// "N. " marker back, since exam papers are usually written as lists.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();
        let mut list_counters: Vec<Option<u64>> = Vec::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::List(start)) => list_counters.push(start),
                Event::End(Tag::List(_)) => {
                    list_counters.pop();
                }
                Event::Start(Tag::Item) => {
                    if let Some(Some(n)) = list_counters.last_mut() {
                        text.push_str(&format!("{}. ", n));
                        *n += 1;
                    }
                }
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak => text.push(' '),
                Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item) => {
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_ordered_list_keeps_numbers() {
        let md = "# Paper 1\n\n1. What is **entropy**?\n2. Define `heat`.\n";
        let text = MarkdownExtractor::markdown_to_text(md);

        assert_eq!(text, "Paper 1\n1. What is entropy?\n2. Define heat.");
    }

    #[test]
    fn test_markdown_list_start_offset() {
        let md = "7. First\n8. Second\n";
        let text = MarkdownExtractor::markdown_to_text(md);

        assert!(text.contains("7. First"));
        assert!(text.contains("8. Second"));
    }

    #[test]
    fn test_markdown_bullets_have_no_marker() {
        let text = MarkdownExtractor::markdown_to_text("- alpha\n- beta\n");
        assert_eq!(text, "alpha\nbeta");
    }
}
