//! Configuration management for the exam overlap tool

use crate::error::{ExamOverlapError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Where the numbering predicate is applied
    pub numbering: NumberingMode,
    /// Re-attach a lone "12." segment to the sentence that follows it
    pub merge_enumerators: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub top_n: usize,
    pub chart_width: usize,
    pub format: OutputFormat,
    pub color_output: bool,
}

/// Which token stream the question numbering marker is detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingMode {
    /// Detect "N ." on the raw tokens, then clean the remainder.
    Raw,
    /// Detect "N ." on already normalized tokens.
    Cleaned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                numbering: NumberingMode::Raw,
                merge_enumerators: true,
            },
            report: ReportConfig {
                top_n: 10,
                chart_width: 40,
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file is created with the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ExamOverlapError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ExamOverlapError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("exam-overlap")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.report.top_n == 0 {
            return Err(ExamOverlapError::Configuration(
                "report.top_n must be at least 1".to_string(),
            ));
        }
        if self.report.chart_width == 0 {
            return Err(ExamOverlapError::Configuration(
                "report.chart_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
