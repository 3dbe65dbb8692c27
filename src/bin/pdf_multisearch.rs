//! Search folders of PDFs from the command line.
//!
//! Usage:
//!   pdf-multisearch -f ~/papers -f ~/books -p "entropy"
//!   pdf-multisearch -f ~/papers -p "entropy" --json
//!   pdf-multisearch -f ~/papers --list

use clap::Parser;
use pdf_multisearch::backend::PdfiumBackend;
use pdf_multisearch::browse::{browse, FolderEntry, DEFAULT_BROWSE_DEPTH};
use pdf_multisearch::{SearchConfig, SearchReport, Searcher};
use std::path::PathBuf;

/// Search text in multiple PDF files.
#[derive(Parser, Debug)]
#[command(name = "pdf-multisearch", version, about)]
struct Args {
    /// Folder to search (repeatable).
    #[arg(short = 'f', long = "folder", required = true)]
    folders: Vec<PathBuf>,

    /// Literal pattern to search for.
    #[arg(short = 'p', long, required_unless_present = "list")]
    pattern: Option<String>,

    /// Print the folder tree instead of searching.
    #[arg(long)]
    list: bool,

    /// Emit results as JSON.
    #[arg(long)]
    json: bool,

    /// Follow symbolic links while walking folders.
    #[arg(long)]
    follow_links: bool,

    /// Maximum folder depth below each root.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log skipped files and pages.
    #[arg(short, long)]
    verbose: bool,
}

fn print_tree(entries: &[FolderEntry], indent: usize) {
    for entry in entries {
        match entry {
            FolderEntry::Folder { name, children, .. } => {
                println!("{:indent$}{}/", "", name, indent = indent);
                print_tree(children, indent + 2);
            },
            FolderEntry::Pdf { name, .. } => println!("{:indent$}{}", "", name, indent = indent),
        }
    }
}

fn print_report(report: &SearchReport) {
    for (path, matches) in &report.results {
        println!("{}", path.display());
        for m in matches {
            let context = m.context().split_whitespace().collect::<Vec<_>>().join(" ");
            println!("  [{}] page {}: {}", m.match_id(), m.page_number() + 1, context);
        }
    }
    println!(
        "{} matches in {} files ({} skipped)",
        report.match_count(),
        report.file_count(),
        report.skipped.len()
    );
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if args.list {
        for folder in &args.folders {
            println!("{}/", folder.display());
            print_tree(&browse(folder, DEFAULT_BROWSE_DEPTH), 2);
        }
        return;
    }

    let Some(pattern) = args.pattern.as_deref() else {
        eprintln!("Error: --pattern is required");
        std::process::exit(2);
    };

    let backend = match PdfiumBackend::new() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };

    let mut config = SearchConfig::new().with_follow_links(args.follow_links);
    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }

    let report = Searcher::with_config(&backend, config).report_all(&args.folders, pattern);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            },
        }
    } else {
        print_report(&report);
    }
}
