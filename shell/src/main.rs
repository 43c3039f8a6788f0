use anyhow::{Context, Result};
use clap::Parser;
use docsearch::run;
use docsearch_core::{build_index, DisplayPolicy, IndexConfig, IndexOptions, Session};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_STOPWORDS: &str = "resources/stopwords.txt";

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Interactive TF-IDF search over a directory of text documents", long_about = None)]
struct Args {
    /// Directory with the documents to index
    root: PathBuf,
    /// Stop-word list, one word per line. Falls back to DOCSEARCH_STOPWORDS, then resources/stopwords.txt
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Leave unreadable documents out of the index instead of aborting
    #[arg(long, default_value_t = false)]
    skip_unreadable: bool,
    /// Maximum number of results to list
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Stop listing results at the first one scoring below this
    #[arg(long, default_value_t = 1e-6)]
    min_similarity: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let stop_words = args
        .stopwords
        .or_else(|| std::env::var_os("DOCSEARCH_STOPWORDS").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STOPWORDS));
    let config = IndexConfig {
        root: args.root,
        stop_words,
        options: IndexOptions { abort_on_document_read_error: !args.skip_unreadable },
    };
    let index = build_index(&config).with_context(|| format!("failed to index {}", config.root.display()))?;

    let policy = DisplayPolicy { limit: args.top, min_similarity: args.min_similarity };
    let mut session = Session::new(&index);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout.lock(), &policy)
}
