// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, warn};
use std::io::Write;
use std::path::PathBuf;

use country_translator::app_config::{Config, LogLevel};
use country_translator::language_utils::display_language;
use country_translator::{AppError, JsonTranslator, Translation, Translator};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// List country codes in dataset order
    Countries,

    /// List the languages a country name is available in
    Languages {
        /// Country code (ISO 3166 alpha-3, e.g. 'can')
        country: String,
    },

    /// Translate a country name
    Translate {
        /// Country code (ISO 3166 alpha-3, e.g. 'can')
        country: String,

        /// Language identifier (defaults to the configured default language)
        language: Option<String>,
    },

    /// Generate shell completions for country-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// country-translator - translated country names from a JSON dataset
#[derive(Parser, Debug)]
#[command(name = "country-translator")]
#[command(version)]
#[command(about = "Look up translated country names")]
#[command(long_about = "Look up country names in other languages from a JSON dataset.

EXAMPLES:
    country-translator countries                   # List known country codes
    country-translator languages can               # Languages available for Canada
    country-translator translate can fr            # Canada's name in French
    country-translator -d ./data translate deu     # Use datasets from ./data
    country-translator completions bash > ct.bash  # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a different
    config file with --config-path. Defaults are used when the file is absent.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Directory to resolve datasets from instead of the bundled ones
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Dataset name to load
    #[arg(short, long, global = true)]
    resource: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation, filtered by log::max_level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                color,
                now,
                tag,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at warn; the configured level is applied once the config is read
    CustomLogger::init(LevelFilter::Warn)?;

    let cli = CommandLineOptions::parse();
    run_command(cli)
}

// Load and validate the config, then build the translator it describes
fn open_translator(cli: &CommandLineOptions) -> Result<(Config, JsonTranslator)> {
    let config = load_config(cli)?;
    log::set_max_level(config.log_level.to_level_filter());
    config
        .validate()
        .map_err(|e| AppError::Config(format!("{:#}", e)))?;

    let translator = config
        .open_translator()
        .map_err(AppError::from)
        .context("Failed to load translation data")?;
    debug!("Translator ready with {} countries", translator.len());

    Ok((config, translator))
}

// Read the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config_path)?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(resource) = &cli.resource {
        config.resource = resource.clone();
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }

    Ok(config)
}

fn run_command(cli: CommandLineOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(*shell, &mut cmd, "country-translator", &mut out);
        }
        Commands::Countries => {
            let (config, translator) = open_translator(&cli)?;
            for code in translator.get_countries() {
                match translator.translate(&code, &config.default_language) {
                    Translation::Found(name) => writeln!(out, "{}\t{}", code, name)?,
                    _ => writeln!(out, "{}", code)?,
                }
            }
        }
        Commands::Languages { country } => {
            let (_, translator) = open_translator(&cli)?;
            let mut languages = translator.get_country_languages(country);
            if languages.is_empty() && !translator.get_countries().contains(country) {
                return Err(AppError::UnknownCountry(country.clone()).into());
            }
            languages.sort();
            for language in languages {
                writeln!(out, "{}", display_language(&language))?;
            }
        }
        Commands::Translate { country, language } => {
            let (config, translator) = open_translator(&cli)?;
            let language = language.as_deref().unwrap_or(&config.default_language);
            let translation = translator.translate(country, language);
            let Some(text) = translation.as_text() else {
                return Err(AppError::UnknownCountry(country.clone()).into());
            };
            if !translation.is_found() {
                warn!("No '{}' translation for '{}'", language, country);
            }
            writeln!(out, "{}", text)?;
        }
    }

    Ok(())
}
