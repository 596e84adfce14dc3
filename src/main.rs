use anyhow::{Context, Result, bail};
use clap::Parser;
use docsearch::server::{SearchServer, SharedBuffer};
use docsearch::utils::ServerConfig;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Path meaning "read from stdin"
const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Rank documents by occurrences of query words")]
struct Cli {
    /// Documents, one per line ("-" for stdin)
    documents: PathBuf,

    /// Query files, one query per line; each file runs as its own batch.
    /// Reads queries from stdin when none are given.
    queries: Vec<PathBuf>,

    /// Rebuild the document base from FILE while the batches run
    #[arg(long, value_name = "FILE")]
    rebuild: Vec<PathBuf>,

    /// Config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of documents per result line
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(limit) = cli.limit {
        config.result_limit = limit;
    }

    let query_paths = if cli.queries.is_empty() {
        vec![PathBuf::from(STDIN_PATH)]
    } else {
        cli.queries
    };

    let stdin_readers = std::iter::once(&cli.documents)
        .chain(&cli.rebuild)
        .chain(&query_paths)
        .filter(|path| is_stdin(path))
        .count();
    if stdin_readers > 1 {
        bail!("stdin can only be used for one input (documents, rebuild or queries)");
    }

    let documents = open_input(&cli.documents)?;
    let mut server = SearchServer::with_config_and_documents(config, documents)
        .with_context(|| format!("Failed to index {}", cli.documents.display()))?;

    for path in &cli.rebuild {
        server.update_document_base(open_input(path)?);
    }

    let mut outputs = Vec::with_capacity(query_paths.len());
    for path in &query_paths {
        let out = SharedBuffer::new();
        server.add_queries_stream(open_input(path)?, out.clone());
        outputs.push(out);
    }

    server.wait()?;

    let mut stdout = io::stdout().lock();
    for out in outputs {
        stdout.write_all(&out.take())?;
    }
    stdout.flush()?;

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    if is_stdin(path) {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
