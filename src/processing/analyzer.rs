//! Two-document question analysis pipeline

use crate::config::{ExtractionConfig, NumberingMode};
use crate::error::Result;
use crate::input::InputManager;
use crate::output::report::{compute_insights, ComparisonReport, DocumentSummary};
use crate::processing::comparator::{compare_questions, QuestionCounts};
use crate::processing::normalizer::{Lexicon, Normalizer};
use crate::processing::questions::QuestionExtractor;
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;

/// Questions extracted from one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentQuestions {
    pub path: String,
    pub character_count: usize,
    pub sentence_count: usize,
    pub questions: Vec<String>,
}

impl DocumentQuestions {
    pub fn counts(&self) -> QuestionCounts {
        QuestionCounts::from_questions(&self.questions)
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            path: self.path.clone(),
            character_count: self.character_count,
            sentence_count: self.sentence_count,
            question_count: self.questions.len(),
            unique_questions: self.counts().len(),
        }
    }
}

pub struct QuestionAnalyzer {
    normalizer: Normalizer,
    extractor: QuestionExtractor,
}

impl QuestionAnalyzer {
    pub fn new(config: &ExtractionConfig, lexicon: Arc<Lexicon>) -> Self {
        Self {
            normalizer: Normalizer::new(lexicon).with_merge_enumerators(config.merge_enumerators),
            extractor: QuestionExtractor::new(config.numbering),
        }
    }

    pub fn numbering(&self) -> NumberingMode {
        self.extractor.mode()
    }

    /// Extract and normalize the questions of a single file.
    pub async fn analyze_document(&self, input: &mut InputManager, path: &Path) -> Result<DocumentQuestions> {
        let text = input.extract_text(path).await?;
        let document = self.analyze_text(&path.to_string_lossy(), &text);
        info!(
            "Found {} questions in {} sentences of {}",
            document.questions.len(),
            document.sentence_count,
            path.display()
        );
        Ok(document)
    }

    pub fn analyze_text(&self, label: &str, text: &str) -> DocumentQuestions {
        let sentence_count = self.normalizer.split_sentences(text).len();
        let questions = self.extractor.extract_from_text(&self.normalizer, text);
        debug!("{}: {:?}", label, questions);

        DocumentQuestions {
            path: label.to_string(),
            character_count: text.chars().count(),
            sentence_count,
            questions,
        }
    }

    /// Join two analysed documents into a report.
    pub fn compare(&self, first: &DocumentQuestions, second: &DocumentQuestions, top_n: usize) -> ComparisonReport {
        let common = compare_questions(&first.questions, &second.questions);
        debug!("{} distinct questions in common", common.len());

        let insights = compute_insights(&common, &first.questions, &second.questions, top_n);
        ComparisonReport::new(first.summary(), second.summary(), insights, self.numbering())
    }
}
