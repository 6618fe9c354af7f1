//! Report structures and the statistics behind them

use crate::config::NumberingMode;
use crate::processing::comparator::QuestionCounts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default size of the ranked list.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCount {
    pub question: String,
    pub count: usize,
}

/// Statistics over the common-question table. Pure data, nothing is printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Question occurrences found in the first document
    pub first_total: usize,

    /// Question occurrences found in the second document
    pub second_total: usize,

    /// Sum of the shared counts
    pub total_common: usize,

    /// Shared occurrences over all occurrences in both documents; `None`
    /// when neither document has questions
    pub common_percentage: Option<f64>,

    /// Shared occurrences over the smaller document's occurrences; `None`
    /// when either document has no questions
    pub overlap_percentage: Option<f64>,

    /// Most repeated common questions, count descending
    pub top_questions: Vec<QuestionCount>,

    /// Every common question in first-seen order
    pub distribution: Vec<QuestionCount>,
}

impl Insights {
    pub fn has_common_questions(&self) -> bool {
        !self.distribution.is_empty()
    }
}

/// Compute the report statistics for a common-question table.
pub fn compute_insights<S: AsRef<str>>(
    common: &QuestionCounts,
    first_questions: &[S],
    second_questions: &[S],
    top_n: usize,
) -> Insights {
    let first_total = first_questions.len();
    let second_total = second_questions.len();
    let total_common = common.total();

    let all_questions = first_total + second_total;
    let common_percentage = if all_questions > 0 {
        Some(total_common as f64 / all_questions as f64 * 100.0)
    } else {
        None
    };

    let smaller = first_total.min(second_total);
    let overlap_percentage = if smaller > 0 {
        Some(total_common as f64 / smaller as f64 * 100.0)
    } else {
        None
    };

    let distribution: Vec<QuestionCount> = common
        .iter()
        .map(|(question, count)| QuestionCount {
            question: question.to_string(),
            count,
        })
        .collect();

    // stable sort keeps first-seen order among equal counts
    let mut top_questions = distribution.clone();
    top_questions.sort_by(|a, b| b.count.cmp(&a.count));
    top_questions.truncate(top_n);

    Insights {
        first_total,
        second_total,
        total_common,
        common_percentage,
        overlap_percentage,
        top_questions,
        distribution,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub path: String,
    pub character_count: usize,
    pub sentence_count: usize,
    pub question_count: usize,
    pub unique_questions: usize,
}

/// Everything a formatter needs to render one comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub first_document: DocumentSummary,
    pub second_document: DocumentSummary,
    pub insights: Insights,
    pub numbering: NumberingMode,
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
}

impl ComparisonReport {
    pub fn new(
        first_document: DocumentSummary,
        second_document: DocumentSummary,
        insights: Insights,
        numbering: NumberingMode,
    ) -> Self {
        Self {
            first_document,
            second_document,
            insights,
            numbering,
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_over_all_occurrences() {
        let common: QuestionCounts = [("a", 3)].into_iter().collect();
        let first = vec!["a"; 5];
        let second = vec!["a"; 5];

        let insights = compute_insights(&common, &first, &second, DEFAULT_TOP_N);

        assert_eq!(insights.total_common, 3);
        let percentage = insights.common_percentage.unwrap();
        assert_eq!(format!("{:.2}", percentage), "30.00");
    }

    #[test]
    fn test_no_questions_guards_division() {
        let common = QuestionCounts::new();
        let empty: Vec<&str> = Vec::new();

        let insights = compute_insights(&common, &empty, &empty, DEFAULT_TOP_N);

        assert_eq!(insights.common_percentage, None);
        assert_eq!(insights.overlap_percentage, None);
        assert!(!insights.has_common_questions());
    }

    #[test]
    fn test_top_questions_ranked_with_stable_ties() {
        let common: QuestionCounts = [("first", 1), ("second", 4), ("third", 1), ("fourth", 4)]
            .into_iter()
            .collect();
        let questions = vec!["x"; 10];

        let insights = compute_insights(&common, &questions, &questions, 3);

        let ranked: Vec<&str> = insights.top_questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(ranked, vec!["second", "fourth", "first"]);
        assert_eq!(insights.distribution.len(), 4);
    }

    #[test]
    fn test_overlap_of_identical_lists_is_complete() {
        let questions = vec!["define entropy", "state law", "define entropy"];
        let common = crate::processing::comparator::compare_questions(&questions, &questions);

        let insights = compute_insights(&common, &questions, &questions, DEFAULT_TOP_N);

        assert_eq!(insights.overlap_percentage, Some(100.0));
        assert_eq!(insights.common_percentage, Some(50.0));
    }
}
