//! CLI frontend for the Hexivium I-Ching oracle.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use hx_session::SessionConfig;
use hx_session::config::DEFAULT_SESSION_FILE;

use crate::logging::{LogConfig, init_logging};

#[derive(Parser)]
#[command(
    name = "hexivium",
    about = "Hexivium: cast an I-Ching hexagram and consult the oracle",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Session file
    #[arg(long, global = true, env = "HEXIVIUM_SESSION", default_value = DEFAULT_SESSION_FILE)]
    session: PathBuf,

    /// Hexagram dataset (JSON) to use instead of the bundled one
    #[arg(long, global = true, env = "HEXIVIUM_DATASET")]
    dataset: Option<PathBuf>,

    /// Seed for a new session's coin tosses
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Program that turns a reading into prose; receives the prompt on stdin
    #[arg(long, global = true, env = "HEXIVIUM_INTERPRETER")]
    interpreter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new reading, discarding the current session
    New,

    /// Cast the next line
    Toss {
        /// Record a line you cast yourself (6, 7, 8 or 9)
        #[arg(long)]
        value: Option<u8>,

        /// Cast all remaining lines
        #[arg(long, conflicts_with = "value")]
        all: bool,
    },

    /// Draw the hexagrams cast so far
    Show,

    /// Show session status
    Status,

    /// Record your question (once all six lines are cast)
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Hand the reading to the interpreter
    Consult,

    /// Add a note to the journal
    Note {
        /// Note text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Export the session journal
    Journal {
        /// Output format: markdown, text
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all hexagrams in the dataset
    List,

    /// Look up a hexagram by number, key (e.g. 111111) or name
    Lookup {
        /// Number, six-digit key, or name
        query: String,
    },

    /// Start an interactive session
    Play,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let config = session_config(&cli);

    let result = match cli.command {
        Commands::New => commands::new::run(&config),
        Commands::Toss { value, all } => commands::toss::run(&config, value, all),
        Commands::Show => commands::show::run(&config),
        Commands::Status => commands::status::run(&config),
        Commands::Ask { question } => commands::ask::run(&config, &question.join(" ")),
        Commands::Consult => commands::consult::run(&config),
        Commands::Note { text } => commands::note::run(&config, &text.join(" ")),
        Commands::Journal { format, output } => {
            commands::journal::run(&config, &format, output.as_deref())
        }
        Commands::List => commands::list::run(&config),
        Commands::Lookup { query } => commands::lookup::run(&config, &query),
        Commands::Play => commands::play::run(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn session_config(cli: &Cli) -> SessionConfig {
    let mut config = SessionConfig::default().with_session_path(&cli.session);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(dataset) = &cli.dataset {
        config = config.with_dataset(dataset);
    }
    if let Some(interpreter) = &cli.interpreter {
        config = config.with_interpreter(interpreter.as_str());
    }
    config
}
