//! Output formatters - console, JSON, Markdown and HTML

use crate::config::{NumberingMode, OutputFormat};
use crate::error::Result;
use crate::output::chart::BarChart;
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

pub const NO_COMMON_QUESTIONS: &str = "No common questions found.";
pub const NO_QUESTIONS: &str = "No questions found.";
const CHART_TITLE: &str = "Distribution of Question Repetitions";

/// Trait for formatting comparison reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String>;
}

/// Console formatter with optional colors and a text bar chart
pub struct ConsoleFormatter {
    use_colors: bool,
    show_chart: bool,
    chart_width: usize,
}

/// JSON formatter for machine-readable export
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for notes and documentation
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with a CSS bar chart
pub struct HtmlFormatter {
    include_styles: bool,
    show_chart: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Common Exam Questions</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        table { width: 100%; border-collapse: collapse; }
        td, th { padding: 6px 10px; border-bottom: 1px solid #e9ecef; text-align: left; }
        .chart-row { display: flex; align-items: center; margin: 4px 0; }
        .chart-label { width: 40%; padding-right: 10px; font-size: 0.9em; }
        .chart-bar { background: #007acc; height: 18px; border-radius: 3px; }
        .chart-value { margin-left: 8px; font-weight: bold; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Common Exam Questions</h1>
            <p>{{ first_path }} &harr; {{ second_path }}</p>
        </div>

        <div class="section">
            <h2>Summary</h2>
            <p>Questions found: {{ first_total }} / {{ second_total }}</p>
            {% if has_common %}
            <p><strong>Total common questions:</strong> {{ total_common }}</p>
            <p><strong>Percentage of common questions:</strong> {{ common_percentage }}</p>
            <p><strong>Overlap with the smaller paper:</strong> {{ overlap_percentage }}</p>
            {% else %}
            <p>{{ no_common_message }}</p>
            {% endif %}
        </div>

        {% if has_common %}
        <div class="section">
            <h2>Top repeated questions</h2>
            <table>
                <tr><th>#</th><th>Question</th><th>Count</th></tr>
                {% for row in top_rows %}
                <tr><td>{{ row.rank }}</td><td>{{ row.question }}</td><td>{{ row.count }}</td></tr>
                {% endfor %}
            </table>
        </div>

        {% if show_chart %}
        <div class="section">
            <h2>{{ chart_title }}</h2>
            {% for bar in chart_bars %}
            <div class="chart-row">
                <span class="chart-label">{{ bar.label }}</span>
                <span class="chart-bar" style="width: {{ bar.width }}%"></span>
                <span class="chart-value">{{ bar.value }}</span>
            </div>
            {% endfor %}
        </div>
        {% endif %}
        {% endif %}

        <div class="metadata">
            Generated {{ generated_at }} by exam-overlap v{{ tool_version }} (numbering: {{ numbering }})
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    show_chart: bool,
    first_path: String,
    second_path: String,
    first_total: usize,
    second_total: usize,
    has_common: bool,
    total_common: usize,
    common_percentage: String,
    overlap_percentage: String,
    no_common_message: String,
    top_rows: Vec<HtmlRow>,
    chart_title: String,
    chart_bars: Vec<HtmlBar>,
    generated_at: String,
    tool_version: String,
    numbering: String,
}

#[derive(Debug, Clone)]
struct HtmlRow {
    rank: usize,
    question: String,
    count: usize,
}

#[derive(Debug, Clone)]
struct HtmlBar {
    label: String,
    value: usize,
    width: String,
}

fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(p) => format!("{:.2}%", p),
        None => "n/a".to_string(),
    }
}

fn numbering_label(mode: NumberingMode) -> &'static str {
    match mode {
        NumberingMode::Raw => "raw",
        NumberingMode::Cleaned => "cleaned",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_chart: bool, chart_width: usize) -> Self {
        Self { use_colors, show_chart, chart_width }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_document(&self, label: &str, doc: &DocumentSummary) -> String {
        format!(
            "{} {} ({} sentences, {} questions, {} unique)\n",
            self.colorize(label, Color::Cyan),
            doc.path,
            doc.sentence_count,
            doc.question_count,
            doc.unique_questions
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let insights = &report.insights;
        let mut output = String::new();

        output.push_str(&self.format_header("COMMON EXAM QUESTIONS"));
        output.push_str(&self.format_document("First: ", &report.first_document));
        output.push_str(&self.format_document("Second:", &report.second_document));
        output.push('\n');

        if !insights.has_common_questions() {
            output.push_str(&format!("{}\n", self.colorize(NO_COMMON_QUESTIONS, Color::Yellow)));
            return Ok(output);
        }

        match insights.common_percentage {
            Some(percentage) => {
                output.push_str(&format!("Total common questions: {}\n", insights.total_common));
                output.push_str(&format!("Percentage of common questions: {:.2}%\n", percentage));
            }
            None => output.push_str(&format!("{}\n", NO_QUESTIONS)),
        }
        if let Some(overlap) = insights.overlap_percentage {
            output.push_str(&format!("Overlap with the smaller paper: {:.2}%\n", overlap));
        }

        output.push_str(&self.format_header("Top repeated questions:"));
        for question in &insights.top_questions {
            output.push_str(&format!(
                "Question: {}\tCount: {}\n",
                self.colorize(&question.question, Color::Green),
                question.count
            ));
        }

        if self.show_chart {
            let chart = BarChart::from_counts(CHART_TITLE, &insights.distribution, self.chart_width);
            output.push('\n');
            output.push_str(&chart.render_text(self.use_colors));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let insights = &report.insights;
        let mut output = String::new();

        output.push_str("# Common Exam Questions\n\n");
        output.push_str("| Document | Questions | Unique |\n|---|---|---|\n");
        for doc in [&report.first_document, &report.second_document] {
            output.push_str(&format!(
                "| `{}` | {} | {} |\n",
                doc.path, doc.question_count, doc.unique_questions
            ));
        }
        output.push('\n');

        if !insights.has_common_questions() {
            output.push_str(&format!("_{}_\n", NO_COMMON_QUESTIONS));
        } else {
            output.push_str(&format!("- **Total common questions:** {}\n", insights.total_common));
            output.push_str(&format!(
                "- **Percentage of common questions:** {}\n",
                format_percentage(insights.common_percentage)
            ));
            output.push_str(&format!(
                "- **Overlap with the smaller paper:** {}\n\n",
                format_percentage(insights.overlap_percentage)
            ));

            output.push_str("## Top repeated questions\n\n");
            output.push_str("| # | Question | Count |\n|---|---|---|\n");
            for (i, question) in insights.top_questions.iter().enumerate() {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    i + 1,
                    question.question.replace('|', "\\|"),
                    question.count
                ));
            }
        }

        if self.include_metadata {
            output.push_str(&format!(
                "\n---\n_Generated {} by exam-overlap v{} (numbering: {})_\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.tool_version,
                numbering_label(report.numbering)
            ));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, show_chart: bool) -> Self {
        Self { include_styles, show_chart }
    }

    fn create_template_data(&self, report: &ComparisonReport) -> HtmlTemplate {
        let insights = &report.insights;
        let chart = BarChart::from_counts(CHART_TITLE, &insights.distribution, 100);

        HtmlTemplate {
            include_styles: self.include_styles,
            show_chart: self.show_chart,
            first_path: report.first_document.path.clone(),
            second_path: report.second_document.path.clone(),
            first_total: insights.first_total,
            second_total: insights.second_total,
            has_common: insights.has_common_questions(),
            total_common: insights.total_common,
            common_percentage: format_percentage(insights.common_percentage),
            overlap_percentage: format_percentage(insights.overlap_percentage),
            no_common_message: NO_COMMON_QUESTIONS.to_string(),
            top_rows: insights
                .top_questions
                .iter()
                .enumerate()
                .map(|(i, q)| HtmlRow {
                    rank: i + 1,
                    question: q.question.clone(),
                    count: q.count,
                })
                .collect(),
            chart_title: chart.title.clone(),
            chart_bars: chart
                .bars
                .iter()
                .map(|bar| HtmlBar {
                    label: bar.label.clone(),
                    value: bar.value,
                    width: format!("{:.1}", bar.percent * 0.6),
                })
                .collect(),
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            tool_version: report.tool_version.clone(),
            numbering: numbering_label(report.numbering).to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, 40, true)
    }

    pub fn with_options(use_colors: bool, show_chart: bool, chart_width: usize, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, show_chart, chart_width),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true, show_chart),
        }
    }

    pub fn generate_report(&self, report: &ComparisonReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, first_name: &str, second_name: &str) -> String {
    let stem = |name: &str| {
        Path::new(name)
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    };
    let base_name = format!("{}_vs_{}", stem(first_name), stem(second_name));

    match format {
        OutputFormat::Console => format!("{}_common.txt", base_name),
        OutputFormat::Json => format!("{}_common.json", base_name),
        OutputFormat::Markdown => format!("{}_common.md", base_name),
        OutputFormat::Html => format!("{}_common.html", base_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::comparator::QuestionCounts;

    fn summary(path: &str, questions: usize) -> DocumentSummary {
        DocumentSummary {
            path: path.to_string(),
            character_count: 100,
            sentence_count: 12,
            question_count: questions,
            unique_questions: questions,
        }
    }

    fn report_with(common: &[(&str, usize)], first: usize, second: usize) -> ComparisonReport {
        let common: QuestionCounts = common.iter().copied().collect();
        let first_questions = vec!["q"; first];
        let second_questions = vec!["q"; second];
        let insights = compute_insights(&common, &first_questions, &second_questions, DEFAULT_TOP_N);
        ComparisonReport::new(summary("paper1.pdf", first), summary("paper3.pdf", second), insights, NumberingMode::Raw)
    }

    #[test]
    fn test_console_report_with_common_questions() {
        let report = report_with(&[("a", 3)], 4, 6);
        let formatter = ConsoleFormatter::new(false, true, 10);

        let output = formatter.format_report(&report).unwrap();

        assert!(output.contains("Total common questions: 3"));
        assert!(output.contains("Percentage of common questions: 30.00%"));
        assert!(output.contains("Question: a\tCount: 3"));
        assert!(output.contains(CHART_TITLE));
    }

    #[test]
    fn test_console_report_without_common_questions_has_no_chart() {
        let report = report_with(&[], 4, 6);
        let formatter = ConsoleFormatter::new(false, true, 10);

        let output = formatter.format_report(&report).unwrap();

        assert!(output.contains(NO_COMMON_QUESTIONS));
        assert!(!output.contains(CHART_TITLE));
        assert!(!output.contains("Percentage"));
    }

    #[test]
    fn test_chart_can_be_disabled() {
        let report = report_with(&[("a", 1)], 1, 1);
        let output = ConsoleFormatter::new(false, false, 10).format_report(&report).unwrap();

        assert!(output.contains("Question: a\tCount: 1"));
        assert!(!output.contains(CHART_TITLE));
    }

    #[test]
    fn test_json_report_is_machine_readable() {
        let report = report_with(&[("define entropy", 2)], 2, 5);
        let json = JsonFormatter::new(false).format_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["insights"]["total_common"], 2);
        assert_eq!(value["insights"]["top_questions"][0]["question"], "define entropy");
        assert_eq!(value["numbering"], "raw");
    }

    #[test]
    fn test_markdown_report_table() {
        let report = report_with(&[("a|b", 1)], 1, 1);
        let markdown = MarkdownFormatter::new(false).format_report(&report).unwrap();

        assert!(markdown.contains("| 1 | a\\|b | 1 |"));
        assert!(markdown.contains("**Percentage of common questions:** 50.00%"));
    }

    #[test]
    fn test_html_report_escapes_and_charts() {
        let report = report_with(&[("<script>", 2), ("osmosis", 1)], 3, 3);
        let html = HtmlFormatter::new(false, true).format_report(&report).unwrap();

        assert!(html.contains("chart-bar"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("width: 60.0%"));
    }

    #[test]
    fn test_suggest_filename() {
        let name = suggest_filename(&OutputFormat::Json, "exams/paper1.pdf", "paper3.pdf");
        assert_eq!(name, "paper1_vs_paper3_common.json");
    }
}
