use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod plotting;
mod workflow;

/// Development-note timing for the darkroom.
#[derive(Parser, Debug)]
#[command(name = "filmlab")]
#[command(about = "Effective step times and merged timelines for film development notes")]
#[command(version)]
struct Cli {
    /// Directory holding the YAML note files
    #[arg(long, global = true, default_value = "./data/notes", env = "FILMLAB_NOTES_DIR")]
    notes_dir: PathBuf,

    /// Skip load-time checks of rules and override ranges
    #[arg(long, global = true)]
    no_validate: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every note and its steps
    List,

    /// Show each step's effective time for one film count
    Resolve {
        #[arg(short, long)]
        note: String,

        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        films: i64,
    },

    /// Show each step's effective time across a range of film counts
    Table {
        #[arg(short, long)]
        note: String,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        from: i64,

        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        to: i64,
    },

    /// Merge several notes running in parallel into one timeline
    Merge {
        /// Note id, repeat for each process in the bath line-up
        #[arg(short, long = "note", required = true)]
        notes: Vec<String>,

        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        films: i64,

        /// Parent directory for saved runs
        #[arg(long, default_value = "./data/runs", env = "FILMLAB_OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Save CSV, notes snapshot and summary into a timestamped run directory
        #[arg(long)]
        save: bool,

        /// Also render the timeline chart (implies --save)
        #[arg(long)]
        chart: bool,

        /// Print the timeline as JSON
        #[arg(long)]
        json: bool,

        /// Also show what is due next after this many elapsed minutes
        #[arg(long)]
        at: Option<f64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filmlab=info,filmlab_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let library = config::NoteLibrary::load(&cli.notes_dir)?;
    let validate = !cli.no_validate;

    match cli.command {
        Commands::List => workflow::list_notes(&library),
        Commands::Resolve { note, films } => {
            workflow::report_resolve(library.get(&note)?, films, validate)?
        }
        Commands::Table { note, from, to } => {
            workflow::report_table(library.get(&note)?, from, to, validate)?
        }
        Commands::Merge {
            notes,
            films,
            output_dir,
            save,
            chart,
            json,
            at,
        } => {
            let options = workflow::MergeOptions {
                output_dir,
                save,
                chart,
                json,
                validate,
                at,
            };
            workflow::run_merge(library.select(&notes)?, films, &options)?
        }
    }

    Ok(())
}
