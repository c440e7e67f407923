//! Rollmap CLI - Generate the cinnamon roll site from a CSV export
//!
//! # Main Commands
//!
//! ```bash
//! rollmap generate                      # google-2025-12-12.csv -> docs/
//! rollmap generate input.csv -o site   # Explicit input and output
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! rollmap parse input.csv     # Dump raw rows as JSON
//! rollmap mapping             # Show the default column mapping
//! rollmap slug "Roll Café"    # Show the slugs names would receive
//! ```

use clap::{Parser, Subcommand};
use rollmap::{
    generate_site, input_from_env, parse_csv_file_with, ColumnMapping, GenerateOptions,
    RawDump, SlugRegistry,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rollmap")]
#[command(about = "Generate a static cinnamon roll site from a CSV export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: CSV -> entries -> HTML site
    Generate {
        /// Input CSV file (default: $ROLLMAP_INPUT or google-2025-12-12.csv)
        input: Option<PathBuf>,

        /// Output directory (default: $ROLLMAP_OUTPUT or docs)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column mapping JSON file (default: $ROLLMAP_MAPPING or built-in)
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Also write data/rolls.json with the raw rows
        #[arg(long)]
        json: bool,

        /// Order entries by name instead of source order
        #[arg(long)]
        sort_by_name: bool,

        /// Site title
        #[arg(long)]
        title: Option<String>,
    },

    /// Parse a CSV file and output the raw JSON dump
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the default column mapping
    Mapping {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the slugs a list of names would receive in one run
    Slug {
        /// Names, in page order
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            mapping,
            delimiter,
            json,
            sort_by_name,
            title,
        } => {
            let mut options = GenerateOptions::from_env();
            if let Some(output) = output {
                options.output_dir = output;
            }
            if mapping.is_some() {
                options.mapping_path = mapping;
            }
            options.delimiter = delimiter;
            options.write_json = json;
            options.sort_by_name = sort_by_name;
            options.title = title;

            let input = input.unwrap_or_else(input_from_env);
            cmd_generate(&input, &options)
        }

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),

        Commands::Mapping { output } => cmd_mapping(output.as_deref()),

        Commands::Slug { names } => cmd_slug(&names),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_generate(input: &Path, options: &GenerateOptions) -> Result<(), Box<dyn std::error::Error>> {
    let report = generate_site(input, options)?;

    eprintln!(
        "\n✨ Generated {} pages in {}",
        report.entries.len(),
        options.output_dir.display()
    );
    if !report.skipped.is_empty() {
        eprintln!("   {} rows skipped (no name)", report.skipped.len());
    }
    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = parse_csv_file_with(input, delimiter)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(result.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", result.headers.len());
    eprintln!("✅ Parsed {} records", result.records.len());

    let json = RawDump::from_parse(&result).to_json()?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_mapping(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mapping = ColumnMapping::default();
    eprint!("{}", mapping.describe());
    write_output(&mapping.to_json()?, output)?;
    Ok(())
}

fn cmd_slug(names: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = SlugRegistry::new();
    for name in names {
        println!("{}\t{}", registry.assign(name), name);
    }
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
