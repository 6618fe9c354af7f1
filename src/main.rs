//! Exam overlap: find exam questions that recur across two documents

use clap::Parser;
use exam_overlap::cli::{self, Cli, Commands, ConfigAction};
use exam_overlap::config::{Config, OutputFormat};
use exam_overlap::error::{ExamOverlapError, Result};
use exam_overlap::input::InputManager;
use exam_overlap::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use exam_overlap::processing::analyzer::{DocumentQuestions, QuestionAnalyzer};
use exam_overlap::processing::normalizer::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Compare {
            first,
            second,
            top,
            output,
            save,
            no_chart,
            no_color,
            numbering,
        } => {
            validate_input(&first)?;
            validate_input(&second)?;

            if let Some(top) = top {
                config.report.top_n = top;
            }
            if let Some(format) = output {
                config.report.format = cli::parse_output_format(&format)
                    .map_err(ExamOverlapError::InvalidInput)?;
            }
            if let Some(mode) = numbering {
                config.extraction.numbering = cli::parse_numbering_mode(&mode)
                    .map_err(ExamOverlapError::InvalidInput)?;
            }
            if no_color {
                config.report.color_output = false;
            }
            config.validate()?;

            info!("Comparing {} with {}", first.display(), second.display());

            let analyzer = QuestionAnalyzer::new(&config.extraction, Arc::new(Lexicon::english()));
            let mut input_manager = InputManager::new();

            let first_doc = analyze_with_progress(&analyzer, &mut input_manager, &first).await?;
            let second_doc = analyze_with_progress(&analyzer, &mut input_manager, &second).await?;

            let report = analyzer.compare(&first_doc, &second_doc, config.report.top_n);

            let console = config.report.format == OutputFormat::Console;
            let generator = ReportGenerator::with_options(
                config.report.color_output && save.is_none(),
                !no_chart,
                config.report.chart_width,
                true,
            );
            let rendered = generator.generate_report(&report, &config.report.format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(
                            &config.report.format,
                            &first.to_string_lossy(),
                            &second.to_string_lossy(),
                        ))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None if console => print!("{}", rendered),
                None => println!("{}", rendered),
            }
        }

        Commands::Extract { file, numbering } => {
            validate_input(&file)?;
            if let Some(mode) = numbering {
                config.extraction.numbering = cli::parse_numbering_mode(&mode)
                    .map_err(ExamOverlapError::InvalidInput)?;
            }

            let analyzer = QuestionAnalyzer::new(&config.extraction, Arc::new(Lexicon::english()));
            let mut input_manager = InputManager::new();
            let document = analyze_with_progress(&analyzer, &mut input_manager, &file).await?;

            if document.questions.is_empty() {
                println!("No questions found.");
            }
            for (i, question) in document.questions.iter().enumerate() {
                println!("{:>3}. {}", i + 1, question);
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| ExamOverlapError::Configuration(e.to_string()))?;
                    println!("# {}\n{}", path.display(), content);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn validate_input(path: &Path) -> Result<()> {
    cli::validate_file_extension(path, SUPPORTED_EXTENSIONS)
        .map_err(|e| ExamOverlapError::InvalidInput(format!("{}: {}", path.display(), e)))
}

async fn analyze_with_progress(
    analyzer: &QuestionAnalyzer,
    input_manager: &mut InputManager,
    path: &Path,
) -> Result<DocumentQuestions> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Reading {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = analyzer.analyze_document(input_manager, path).await;
    spinner.finish_and_clear();
    result
}
