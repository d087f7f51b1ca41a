use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::{build_server, load_documents, run_console, run_demo, run_match, run_search, Filter};
use search_core::{DocumentId, DocumentStatus};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search-server")]
#[command(about = "In-memory TF-IDF search with stop words and minus words", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the built-in sample documents and print example rankings
    Demo,
    /// Read stop words, documents and queries from stdin, line by line
    Console,
    /// Rank documents from a JSON/JSONL file against a query
    Search {
        /// Input file (.json or .jsonl)
        #[arg(long)]
        input: PathBuf,
        /// Space-separated stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        #[arg(long, allow_hyphen_values = true)]
        query: String,
        /// Only return documents with this status
        #[arg(long, default_value = "actual", conflicts_with = "even_ids")]
        status: DocumentStatus,
        /// Only return documents with even ids, regardless of status
        #[arg(long, default_value_t = false)]
        even_ids: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show which query words a single document matches
    Match {
        /// Input file (.json or .jsonl)
        #[arg(long)]
        input: PathBuf,
        /// Space-separated stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        #[arg(long, allow_hyphen_values = true)]
        query: String,
        #[arg(long, allow_negative_numbers = true)]
        id: DocumentId,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command {
        Commands::Demo => run_demo(&mut out)?,
        Commands::Console => run_console(io::stdin().lock(), &mut out)?,
        Commands::Search { input, stop_words, query, status, even_ids, json } => {
            let server = build_server(&stop_words, load_documents(&input)?)?;
            let filter = if even_ids { Filter::EvenIds } else { Filter::Status(status) };
            run_search(&server, &query, filter, json, &mut out)?;
        }
        Commands::Match { input, stop_words, query, id, json } => {
            let server = build_server(&stop_words, load_documents(&input)?)?;
            run_match(&server, &query, id, json, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
