//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use abg_analyzer::output::OutputMode;

/// abg - Arterial/venous blood gas interpretation
#[derive(Parser, Debug)]
#[command(
    name = "abg",
    version,
    about = "Arterial/venous blood gas interpretation",
    long_about = "Interpret a blood gas panel.\n\n\
                  Determines whether a sample looks arterial or venous, calculates the\n\
                  anion gap and suggests the primary acid-base disorder."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Results history file (overrides the configured location)
    #[arg(long, global = true, value_name = "PATH")]
    pub results_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpret a blood gas panel
    Interpret {
        #[command(flatten)]
        values: ReadingArgs,

        /// Save the interpretation to the results history
        #[arg(short, long)]
        save: bool,
    },

    /// List saved interpretations
    History {
        /// Show only the most recent N interpretations
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show or set the color theme (light, dark)
    Theme {
        /// New theme; omit to show the current one
        theme: Option<String>,
    },

    /// Show version
    Version,
}

/// Lab values as entered; validated by the interpreter
#[derive(clap::Args, Debug)]
pub struct ReadingArgs {
    /// Blood pH
    #[arg(long, allow_hyphen_values = true)]
    pub ph: Option<String>,

    /// pCO2 (mmHg)
    #[arg(long, allow_hyphen_values = true)]
    pub pco2: Option<String>,

    /// HCO3 (mEq/L)
    #[arg(long, allow_hyphen_values = true)]
    pub hco3: Option<String>,

    /// PaO2 (mmHg)
    #[arg(long, allow_hyphen_values = true)]
    pub pao2: Option<String>,

    /// Sodium (mEq/L, optional)
    #[arg(long, allow_hyphen_values = true)]
    pub na: Option<String>,

    /// Chloride (mEq/L, optional)
    #[arg(long, allow_hyphen_values = true)]
    pub cl: Option<String>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Interpret { values, save }) => {
            commands::interpret(values, save, cli.results_file, output_mode)
        },
        Some(Command::History { limit }) => {
            commands::history(limit, cli.results_file, output_mode)
        },
        Some(Command::Theme { theme }) => commands::theme(theme.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "name": "abg",
                        "version": abg_analyzer::VERSION
                    }))?
                );
            } else {
                println!("abg {}", abg_analyzer::VERSION);
            }
            Ok(())
        },
        None => {
            println!("abg v{}", abg_analyzer::VERSION);
            println!("Arterial/venous blood gas interpretation. Run `abg --help` for usage.");
            Ok(())
        },
    }
}
