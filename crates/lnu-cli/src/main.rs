//! L'nui'suti CLI - Mi'kmaw word analysis and term drafting.
//!
//! Every answer from `word`, `sentence`, `generate` and `compound` that does
//! not come from a curated entry is a guess for a fluent speaker to check.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{analyze, config as config_cmd, generate, lexicon, serve};
use config::Config;

/// L'nui'suti CLI - analyse Mi'kmaw words and draft new terms.
#[derive(Parser, Debug)]
#[command(
    name = "lnu",
    author,
    version,
    about = "L'nui'suti: Mi'kmaw-English lexicon bridge",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Extra data document (.json or .toml) to load on top of the seed
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Do not load the built-in seed data
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse one word: lexicon entry if known, heuristic breakdown otherwise.
    Word {
        /// The word to analyse.
        word: String,
    },

    /// Analyse each word of a sentence (commas count as spaces).
    Sentence {
        /// Sentence text; multiple arguments are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Draft candidate words for a new concept.
    Generate {
        /// Concept name, e.g. "refrigerator".
        concept: String,

        /// What the thing does.
        #[arg(short, long, default_value = "")]
        purpose: String,

        /// Domain tag (can be specified multiple times).
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Look up a dictionary entry by Mi'kmaw form or English gloss.
    Lookup {
        /// Search text.
        query: String,

        /// Which side the query is written in: auto, mikmaw or english.
        #[arg(short = 't', long, default_value = "auto")]
        input_type: String,

        /// Spelling(s) to show: SFO (Smith-Francis), LO (Listuguj) or BOTH.
        #[arg(short, long, default_value = "SFO")]
        orth: String,
    },

    /// Playful compound: English stub + Mi'kmaw motion suffix.
    Compound {
        /// English stub, e.g. "weenie".
        stub: String,

        /// Suffix form (defaults to "aqan").
        #[arg(short, long)]
        suffix: Option<String>,
    },

    /// List all lexicon headwords.
    Entries,

    /// Serve the JSON API.
    Serve {
        /// Bind address (overrides LNU_BIND and the config file).
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    let subscriber = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);
    // RUST_LOG, when set, wins over -v/-q
    if std::env::var_os("RUST_LOG").is_some() {
        subscriber.with_env_filter(EnvFilter::from_default_env()).init();
    } else {
        subscriber.with_max_level(level).init();
    }

    // Flags > env > config file > defaults
    let config = Config::load()?.with_overrides(cli.data, cli.no_seed);

    match cli.command {
        Commands::Word { word } => {
            let translator = commands::load_translator(&config)?;
            analyze::word(&translator, &word, cli.json)?;
        }

        Commands::Sentence { words } => {
            let translator = commands::load_translator(&config)?;
            analyze::sentence(&translator, &words.join(" "), cli.json)?;
        }

        Commands::Generate {
            concept,
            purpose,
            tags,
        } => {
            let translator = commands::load_translator(&config)?;
            generate::generate(&translator, &concept, &purpose, &tags, cli.json)?;
        }

        Commands::Lookup {
            query,
            input_type,
            orth,
        } => {
            let translator = commands::load_translator(&config)?;
            lexicon::lookup(&translator, &query, &input_type, &orth, cli.json)?;
        }

        Commands::Compound { stub, suffix } => {
            let translator = commands::load_translator(&config)?;
            generate::compound(&translator, &stub, suffix.as_deref(), cli.json)?;
        }

        Commands::Entries => {
            let translator = commands::load_translator(&config)?;
            lexicon::entries(&translator, cli.json)?;
        }

        Commands::Serve { bind } => {
            let translator = commands::load_translator(&config)?;
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            serve::execute(translator, &bind).await?;
        }

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => config_cmd::show(&config, cli.json)?,
            ConfigCommands::Path => config_cmd::path()?,
        },
    }

    Ok(())
}
