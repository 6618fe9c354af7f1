//! Horizontal bar chart of common question counts

use crate::output::report::QuestionCount;
use colored::Colorize;

const MAX_LABEL_CHARS: usize = 40;
const BAR_CHAR: char = '█';

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
    /// Bar length in cells
    pub length: usize,
    /// Bar length relative to the longest bar, 0-100
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Scale every count against the largest one; any non-zero count gets
    /// at least one cell.
    pub fn from_counts(title: &str, counts: &[QuestionCount], width: usize) -> Self {
        let max = counts.iter().map(|c| c.count).max().unwrap_or(0);

        let bars = counts
            .iter()
            .map(|c| {
                let ratio = if max == 0 { 0.0 } else { c.count as f64 / max as f64 };
                let mut length = (ratio * width as f64).round() as usize;
                if c.count > 0 && length == 0 {
                    length = 1;
                }
                Bar {
                    label: truncate_label(&c.question, MAX_LABEL_CHARS),
                    value: c.count,
                    length,
                    percent: ratio * 100.0,
                }
            })
            .collect();

        Self {
            title: title.to_string(),
            bars,
        }
    }

    pub fn render_text(&self, use_colors: bool) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|bar| bar.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        output.push_str(&format!("{}\n", self.title));
        for bar in &self.bars {
            let cells: String = std::iter::repeat(BAR_CHAR).take(bar.length).collect();
            let cells = if use_colors { cells.cyan().to_string() } else { cells };
            output.push_str(&format!(
                "{:<width$} │ {} {}\n",
                bar.label,
                cells,
                bar.value,
                width = label_width
            ));
        }
        output.push_str(&format!("{:<width$} └─ Count\n", "Question", width = label_width));
        output
    }
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, usize)]) -> Vec<QuestionCount> {
        entries
            .iter()
            .map(|(q, c)| QuestionCount { question: q.to_string(), count: *c })
            .collect()
    }

    #[test]
    fn test_bars_scale_to_width() {
        let chart = BarChart::from_counts("Distribution", &counts(&[("a", 4), ("b", 2), ("c", 1)]), 20);

        let lengths: Vec<usize> = chart.bars.iter().map(|b| b.length).collect();
        assert_eq!(lengths, vec![20, 10, 5]);
        assert_eq!(chart.bars[1].percent, 50.0);
    }

    #[test]
    fn test_small_counts_stay_visible() {
        let chart = BarChart::from_counts("Distribution", &counts(&[("big", 100), ("tiny", 1)]), 10);
        assert_eq!(chart.bars[1].length, 1);
    }

    #[test]
    fn test_render_plain_text() {
        let chart = BarChart::from_counts("Distribution", &counts(&[("define entropy", 2), ("state law", 1)]), 4);
        let text = chart.render_text(false);

        assert!(text.starts_with("Distribution\n"));
        assert!(text.contains("define entropy │ ████ 2"));
        assert!(text.contains("state law      │ ██ 1"));
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let long = "word ".repeat(20);
        let chart = BarChart::from_counts("t", &counts(&[(long.as_str(), 1)]), 4);

        assert_eq!(chart.bars[0].label.chars().count(), MAX_LABEL_CHARS);
        assert!(chart.bars[0].label.ends_with("..."));
    }
}
