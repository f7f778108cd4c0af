use clap::{Parser, Subcommand};
use knitpress::{batch, catalog, footer, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "knitpress")]
#[command(about = "Asset pipeline for the knitting pattern site")]
#[command(long_about = "\
Asset pipeline for the knitting pattern site

Generates responsive image derivatives from raw source photos and injects
the shared footer into built HTML pages.

Derivative output layout:

  images/
  ├── patterns/                  # 3:4 pattern tiles, WebP + JPEG
  │   ├── meadow-shawl-320w.webp
  │   ├── meadow-shawl-320w.jpg
  │   └── ...
  ├── categories/                # Section tiles
  ├── featured/                  # What's-new images
  ├── logo/                      # Width-only PNG, aspect preserved
  │   └── logo-120w.png
  ├── favicon-16.png             # Fixed square favicons
  ├── favicon-32.png
  └── favicon-180.png

The batch is driven by a declarative catalog mapping raw filenames to
canonical output names. Run 'knitpress gen-catalog' to print the stock
catalog as documented TOML, edit it, and pass it back with --catalog.")]
#[command(version = version_string())]
struct Cli {
    /// Directory of raw source images
    #[arg(long, default_value = "source-images", global = true)]
    source: PathBuf,

    /// Output directory for generated derivatives
    #[arg(long, default_value = "images", global = true)]
    output: PathBuf,

    /// Catalog TOML file (defaults to the built-in stock catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate all image derivatives from the catalog
    Process {
        /// Write a JSON batch report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Inject the shared footer into built HTML pages
    Footer {
        /// Directory of built HTML pages
        #[arg(long, default_value = "site")]
        pages: PathBuf,
    },
    /// Validate the catalog and source files without rendering
    Check,
    /// Print the stock catalog as documented TOML
    GenCatalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let load_catalog = || -> Result<catalog::Catalog, catalog::CatalogError> {
        match &cli.catalog {
            Some(path) => catalog::Catalog::load(path),
            None => Ok(catalog::Catalog::stock()),
        }
    };

    match &cli.command {
        Command::Process { report } => {
            let catalog = load_catalog()?;
            println!(
                "==> Processing {} entries: {} → {}",
                catalog.entries.len(),
                cli.source.display(),
                cli.output.display()
            );
            let result = batch::run(&catalog, &cli.source, &cli.output, output::print_entry)?;
            output::print_summary(&result);

            if let Some(report_path) = report {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(report_path, json)?;
                println!("Report: {}", report_path.display());
            }
        }
        Command::Footer { pages } => {
            let config = footer::FooterConfig::default();
            let count = footer::inject_dir(pages, &config)?;
            println!("Injected footer into {count} pages under {}", pages.display());
        }
        Command::Check => {
            let catalog = load_catalog()?;
            println!("==> Checking catalog sources in {}", cli.source.display());
            let mut missing = 0;
            for entry in &catalog.entries {
                let path = cli.source.join(&entry.source);
                if !path.is_file() {
                    eprintln!("missing source for '{}': {}", entry.name, path.display());
                    missing += 1;
                }
            }
            if missing > 0 {
                return Err(format!("{missing} catalog sources missing").into());
            }
            println!("==> Catalog is valid, all {} sources present", catalog.entries.len());
        }
        Command::GenCatalog => {
            print!("{}", catalog::stock_catalog_toml());
        }
    }

    Ok(())
}
