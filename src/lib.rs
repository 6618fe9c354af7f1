//! Exam overlap library: find numbered questions shared by two documents

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{ExamOverlapError, Result};
