// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use palavra::app_config::{Config, LogLevel, ProviderConfig, ProviderKind};
use palavra::providers::create_provider;
use palavra::server::{self, AppState};
use palavra::store::{DatabaseConnection, TranslationStore};
use palavra::translator::Translator;

/// CLI Wrapper for ProviderKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProviderKind {
    OpenAI,
    Anthropic,
    Ollama,
}

impl From<CliProviderKind> for ProviderKind {
    fn from(cli_kind: CliProviderKind) -> Self {
        match cli_kind {
            CliProviderKind::OpenAI => ProviderKind::OpenAI,
            CliProviderKind::Anthropic => ProviderKind::Anthropic,
            CliProviderKind::Ollama => ProviderKind::Ollama,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Palavra - AI-powered vocabulary translation service
///
/// Accepts a word or phrase, translates it into the supported target
/// languages using an LLM provider, stores every translation per language,
/// and serves CRUD plus CSV export endpoints over the stored data.
#[derive(Parser, Debug)]
#[command(name = "palavra")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered vocabulary translation service")]
struct CommandLineOptions {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Address to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Translation provider to use (overrides config)
    #[arg(long, value_enum)]
    provider: Option<CliProviderKind>,

    /// Model name to use for translation (overrides config)
    #[arg(short, long)]
    model: Option<String>,

    /// SQLite database file path (overrides config)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// Custom logger implementation writing colored, timestamped lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_code_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_code_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    // Pick up API keys and the like from a .env file when present
    dotenv::dotenv().ok();

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    if !std::path::Path::new(&cli.config_path).exists() {
        warn!(
            "Config file not found at '{}', creating default config.",
            cli.config_path
        );
    }

    let mut config = Config::load_or_create(&cli.config_path)?;

    // Override config with CLI options if provided
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if let Some(provider) = &cli.provider {
        let kind: ProviderKind = provider.clone().into();
        if kind != config.provider.kind {
            config.provider = ProviderConfig::new(kind);
        }
    }

    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }

    if let Some(database) = &cli.database {
        config.database_path = Some(database.clone());
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Open the database and make sure every per-language table exists
    let db = match &config.database_path {
        Some(path) => DatabaseConnection::new(path)?,
        None => DatabaseConnection::new_default()?,
    };
    let store = TranslationStore::new(db);

    // One configured provider client, reused across requests
    let provider = create_provider(&config.provider)
        .map_err(|e| anyhow::anyhow!("Failed to create provider: {}", e))?;
    info!(
        "Using {} provider with model '{}'",
        config.provider.kind.display_name(),
        config.provider.model
    );

    let translator = Translator::new(provider, store.clone(), config.source_language.clone());

    let state = Arc::new(AppState { translator, store });

    server::serve(&config.server.host, config.server.port, state).await
}
