use clap::{Parser, Subcommand};
use log::LevelFilter;
use palette_form::config::AppConfig;
use std::path::PathBuf;

mod answers;
mod commands;

#[derive(Parser)]
#[command(name = "palette-form-cli")]
#[command(about = "Run the palette questionnaire without a browser")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to config.toml + config.{dev,prod}.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the translation of a key
    Translate {
        /// Translation key, e.g. button.submit
        key: String,

        /// Language code (defaults to i18n.default_language)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Translation pack maintenance
    Translations {
        #[command(subcommand)]
        command: commands::translations::TranslationsCommand,
    },

    /// Submit a filled questionnaire to the configured endpoint
    Submit {
        /// Answers file (TOML or JSON) mapping field names to values
        #[arg(short, long)]
        answers: PathBuf,

        /// File standing in for session storage
        #[arg(short, long, default_value = "session.json")]
        storage: PathBuf,
    },
}

/// Install env_logger before anything logs
///
/// `RUST_LOG` wins when set. Otherwise the logger passes everything and the
/// level is gated through `log::set_max_level`, so the configured level can be
/// applied once the config file has been read. Returns whether the level is
/// still adjustable.
fn init_logging(verbose: bool) -> bool {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    if from_env {
        return false;
    }
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    !verbose
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let adjustable = init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    if adjustable {
        match config.logging.level.parse::<LevelFilter>() {
            Ok(level) => log::set_max_level(level),
            Err(_) => log::warn!(
                "Unknown logging.level '{}', keeping info",
                config.logging.level
            ),
        }
    }

    match cli.command {
        Commands::Translate { key, lang } => {
            let language = lang.unwrap_or_else(|| config.i18n.default_language.clone());
            commands::translate::run(&key, &language)
        }
        Commands::Translations { command } => commands::translations::execute(&command),
        Commands::Submit { answers, storage } => {
            commands::submit::run(&config, &answers, storage).await
        }
    }
}
