use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Vitae — resume relevance scoring and interview-likelihood engine.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full analysis of a resume against an optional job description
    Analyze {
        /// Resume text file
        resume: PathBuf,
        /// Job description text file
        #[arg(long)]
        job: Option<PathBuf>,
        /// Force a specific industry instead of detecting one
        #[arg(long)]
        industry: Option<String>,
        /// Role category for keyword fallback (default: software-engineering)
        #[arg(long)]
        category: Option<String>,
        /// BM25 k1 parameter
        #[arg(long)]
        k1: Option<f64>,
        /// BM25 b parameter
        #[arg(long)]
        b: Option<f64>,
        /// Emit JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },
    /// Lightweight graded score estimate
    Quick {
        /// Resume text file
        resume: PathBuf,
        /// Job description text file
        #[arg(long)]
        job: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Sentence-level semantic similarity between resume and job description
    Similarity {
        /// Resume text file
        resume: PathBuf,
        /// Job description text file
        job: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Interview-likelihood prediction from scores and application signals
    Predict(commands::predict::PredictArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            resume,
            job,
            industry,
            category,
            k1,
            b,
            json,
        } => commands::analyze::run(&resume, job.as_deref(), industry.as_deref(),
            category.as_deref(), k1, b, json),
        Commands::Quick { resume, job, json } => {
            commands::quick::run(&resume, job.as_deref(), json)
        }
        Commands::Similarity { resume, job, json } => {
            commands::similarity::run(&resume, &job, json)
        }
        Commands::Predict(args) => commands::predict::run(&args),
    }
}

fn init_tracing(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vitae={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
