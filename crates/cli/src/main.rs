use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use repotok_corpus::{clean_readme, load_readme, FileScanner, RepoFetcher};
use repotok_tokenizer::{Document, IdentifierTokenizer, Tokenizer};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repotok")]
#[command(about = "Sub-word tokenization of code identifiers for search", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a file ("-" for stdin) and print one JSON token per line
    Tokens {
        /// File to tokenize, or "-" to read stdin
        path: String,
    },

    /// Shallow-clone a repository so its files can be tokenized
    Fetch {
        /// Repository URL
        url: String,

        /// Directory to clone into
        dest: PathBuf,

        /// Clone depth
        #[arg(long, default_value_t = 1)]
        depth: u32,
    },

    /// Print a README cleaned of links, images, and badges
    Readme {
        /// Repository root containing README.md
        repo_dir: PathBuf,
    },

    /// List the source files that would be fed to the tokenizer
    Scan {
        /// Directory to walk
        root: PathBuf,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Tokens { path } => run_tokens(&path),
        Commands::Fetch { url, dest, depth } => {
            let checkout = RepoFetcher::with_depth(depth)
                .fetch(&url, &dest)
                .with_context(|| format!("fetching {url}"))?;
            println!("{}", checkout.display());
            Ok(())
        }
        Commands::Readme { repo_dir } => {
            let readme = load_readme(&repo_dir)
                .with_context(|| format!("loading README from {}", repo_dir.display()))?;
            print!("{}", clean_readme(&readme));
            Ok(())
        }
        Commands::Scan { root } => {
            for path in FileScanner::new(&root).scan() {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

fn run_tokens(path: &str) -> Result<()> {
    let (bytes, column) = if path == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("reading stdin")?;
        (buffer, "<stdin>".to_string())
    } else {
        let bytes = fs::read(path).with_context(|| format!("reading {path}"))?;
        (bytes, path.to_string())
    };

    let doc = Document::new(&bytes).with_column(&column);
    let mut stream = IdentifierTokenizer
        .open(doc)
        .context("opening tokenizer stream")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut emitted = 0usize;
    while let Some(token) = stream.next()? {
        serde_json::to_writer(&mut out, &token)?;
        out.write_all(b"\n")?;
        emitted += 1;
    }
    log::debug!("Emitted {emitted} tokens from {column}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
