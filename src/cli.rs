//! CLI interface for the exam overlap tool

use crate::config::{NumberingMode, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "exam-overlap")]
#[command(about = "Find exam questions that recur across two documents")]
#[command(long_about = "Extract numbered questions from two exam papers (PDF, TXT, MD), normalize them and report which questions appear in both, with frequency statistics and a bar chart")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare the questions of two documents
    Compare {
        /// First document (PDF, TXT, MD)
        first: PathBuf,

        /// Second document (PDF, TXT, MD)
        second: PathBuf,

        /// Number of top repeated questions to list
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Do not render the bar chart
        #[arg(long)]
        no_chart: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,

        /// Where numbering markers are detected: raw, cleaned
        #[arg(short, long)]
        numbering: Option<String>,
    },

    /// List the questions found in a single document
    Extract {
        /// Document to read (PDF, TXT, MD)
        file: PathBuf,

        /// Where numbering markers are detected: raw, cleaned
        #[arg(short, long)]
        numbering: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Parse and validate numbering mode
pub fn parse_numbering_mode(mode: &str) -> Result<NumberingMode, String> {
    match mode.to_lowercase().as_str() {
        "raw" => Ok(NumberingMode::Raw),
        "cleaned" | "legacy" => Ok(NumberingMode::Cleaned),
        _ => Err(format!("Invalid numbering mode: {}. Supported: raw, cleaned", mode)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
