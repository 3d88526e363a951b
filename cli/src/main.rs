mod corpus;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docfind_core::persist::{load_idf, load_tf, save_idf, save_tf};
use docfind_core::{Corpus, SearchEngine};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docfind")]
#[command(about = "Build and query tf-idf indexes over XML document collections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse <collection>.xml and write <collection>.tf / <collection>.idf
    Build {
        /// Collection path without the .xml extension
        collection: String,
    },
    /// Load a built index and answer queries interactively
    Query {
        collection: String,
    },
    /// Run a single query against a built index
    Search {
        collection: String,
        /// Query terms, already lowercase and punctuation-free
        terms: Vec<String>,
        /// Print hits as JSON (null when nothing matched)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { collection } => build(Path::new(&collection)),
        Commands::Query { collection } => {
            let engine = load_engine(Path::new(&collection))?;
            console(&engine, io::stdin().lock(), io::stdout())
        }
        Commands::Search {
            collection,
            terms,
            json,
        } => {
            let engine = load_engine(Path::new(&collection))?;
            search_once(&engine, &terms, json, io::stdout())
        }
    }
}

/// Parse, tokenize, index and persist one collection. The index files land
/// next to the XML file, under the same stem.
fn build(collection: &Path) -> Result<()> {
    let texts = corpus::parse_collection(collection.with_extension("xml"))?;
    tracing::info!(num_docs = texts.len(), "parsed collection");

    let corpus = Corpus::from_texts(texts);
    let engine = SearchEngine::build(&corpus)?;
    save_tf(collection.with_extension("tf"), engine.tf())?;
    save_idf(collection.with_extension("idf"), engine.idf())?;
    tracing::info!(collection = %collection.display(), "index build complete");
    Ok(())
}

fn load_engine(collection: &Path) -> Result<SearchEngine> {
    let tf = load_tf(collection.with_extension("tf"))
        .with_context(|| format!("loading tf table for {}", collection.display()))?;
    let idf = load_idf(collection.with_extension("idf"))
        .with_context(|| format!("loading idf table for {}", collection.display()))?;
    tracing::info!(num_docs = tf.num_docs(), num_terms = idf.len(), "loaded index");
    Ok(SearchEngine::from_parts(tf, idf))
}

/// Interactive query loop: whitespace-separated terms per line, empty line
/// (or end of input) quits.
fn console<R: BufRead, W: Write>(engine: &SearchEngine, mut input: R, mut out: W) -> Result<()> {
    loop {
        write!(out, "query> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let terms: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
        if terms.is_empty() {
            break;
        }
        print_hits(engine, &terms, &mut out)?;
    }
    Ok(())
}

fn search_once<W: Write>(engine: &SearchEngine, terms: &[String], json: bool, mut out: W) -> Result<()> {
    if json {
        let hits = engine.execute_query(terms);
        writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
        return Ok(());
    }
    print_hits(engine, terms, &mut out)
}

fn print_hits<W: Write>(engine: &SearchEngine, terms: &[String], out: &mut W) -> Result<()> {
    match engine.execute_query(terms) {
        Some(hits) => {
            for hit in hits {
                writeln!(out, "{} ({})", hit.doc_id, hit.score)?;
            }
        }
        None => writeln!(out, "no documents found")?,
    }
    Ok(())
}
