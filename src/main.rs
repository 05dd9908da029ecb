//! # bookscrape CLI
//!
//! Command-line front end for the catalog scraper.
//!
//! - `product`: scrape one product page, print its fields, optionally save a CSV
//! - `category`: scrape one category into `<output>/<category>/`
//! - `site`: scrape every category of the site into `<output>/`
//!
//! Progress is logged to stderr through `tracing`; set `RUST_LOG` to change
//! the level.

mod telemetry;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use bookscrape::catalog::{
    self, COLUMNS, DEFAULT_BASE_URL, ImageExtension, ProductRecord, ScraperConfig, extraction,
};
use bookscrape::http::HttpClient;
use bookscrape::pipeline::{self, CategoryReport};
use bookscrape::storage;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;
use tracing::instrument;

#[derive(Parser)]
#[command(author, version, about = "Scrape the Books to Scrape catalog into CSV files and cover images", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Site root used for the category list and image URLs
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// User agent sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,

    /// Name cover images after their Content-Type instead of always using .jpg
    #[arg(long, global = true)]
    detect_image_extension: bool,

    /// Also write logs to bookscrape.log in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape a single product page
    Product(ProductArgs),

    /// Scrape every book of one category
    Category(CategoryArgs),

    /// Scrape every category of the site
    Site(SiteArgs),
}

#[derive(Args, Debug)]
struct ProductArgs {
    /// Product page URL
    #[arg(required = true)]
    url: String,

    /// Write the product to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not ask for confirmation before writing
    #[arg(short, long)]
    yes: bool,
}

#[derive(Args, Debug)]
struct CategoryArgs {
    /// Category listing URL (index.html or any page-N.html)
    #[arg(required = true)]
    url: String,

    /// Existing directory that receives the category folder
    #[arg(short, long, required = true)]
    output: PathBuf,

    /// Category name (default: the heading of the category page)
    #[arg(short, long)]
    name: Option<String>,
}

#[derive(Args, Debug)]
struct SiteArgs {
    /// Existing directory that receives one folder per category
    #[arg(short, long, required = true)]
    output: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    telemetry::init_tracing_subscriber(cli.global.log_dir.as_deref())?;

    let config = scraper_config(&cli.global);
    let http = HttpClient::new(&config)?;

    match cli.command {
        Some(Commands::Product(args)) => {
            product_command(&http, &config, args).await?;
        }
        Some(Commands::Category(args)) => {
            category_command(&http, &config, args).await?;
        }
        Some(Commands::Site(args)) => {
            site_command(&http, &config, args).await?;
        }
        None => {
            // If no command is provided, show help
            let _ = Cli::parse_from(["bookscrape", "--help"]);
        }
    }

    Ok(())
}

fn scraper_config(args: &GlobalArgs) -> ScraperConfig {
    let mut builder = ScraperConfig::builder()
        .base_url(args.base_url.clone())
        .timeout_secs(args.timeout);

    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    if args.detect_image_extension {
        builder = builder.image_extension(ImageExtension::FromContentType);
    }

    builder.build()
}

#[instrument(skip(http, config))]
async fn product_command(
    http: &HttpClient,
    config: &ScraperConfig,
    args: ProductArgs,
) -> anyhow::Result<()> {
    // Fail on a bad output directory before touching the network
    if let Some(output) = &args.output {
        storage::ensure_output_root(parent_dir(output))?;
    }

    let document = http.fetch_document(&args.url).await?;
    print_raw_fields(&document);

    let record = catalog::build_record(&args.url, &document, &config.base()?)?;
    print_record(&record);

    let Some(output) = args.output else {
        return Ok(());
    };

    if !args.yes && !confirm(&format!("Confirm creation of the file {}?", output.display()))? {
        println!("Nothing written");
        return Ok(());
    }

    storage::write_records(&output, &[record])
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Saved product to {}", output.display());

    Ok(())
}

#[instrument(skip(http, config))]
async fn category_command(
    http: &HttpClient,
    config: &ScraperConfig,
    args: CategoryArgs,
) -> anyhow::Result<()> {
    let report =
        pipeline::run_category(http, config, args.name.as_deref(), &args.url, &args.output).await?;

    print_category_summary(&report);
    Ok(())
}

#[instrument(skip(http, config))]
async fn site_command(
    http: &HttpClient,
    config: &ScraperConfig,
    args: SiteArgs,
) -> anyhow::Result<()> {
    println!("Scraping categories from {}", config.base_url);

    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("[{elapsed_precise}] {spinner} {pos} categories {msg}")?,
    );

    let report = pipeline::run_site(http, config, &args.output, |link, category| {
        progress_bar.inc(1);
        progress_bar.set_message(format!("last: {}", link.name));
        progress_bar.suspend(|| print_category_summary(category));
    })
    .await?;

    progress_bar.finish_with_message("done");

    println!(
        "Scraped {} categories, {} books",
        report.categories.len(),
        report.records_written()
    );
    if !report.failed_categories.is_empty() {
        println!("Categories that could not be scraped:");
        for failure in &report.failed_categories {
            println!("  {} ({})", failure.url, failure.reason);
        }
        bail!("{} categories failed", report.failed_categories.len());
    }

    Ok(())
}

/// Print the fields as found on the page, before any transform
fn print_raw_fields(document: &Html) {
    let table = extraction::table_fields(document);

    println!("\nExtracted information:\n======================\n");
    println!("title :  {}", extraction::title(document));
    for label in extraction::TABLE_LABELS {
        println!("{} :  {}", label, table.get(label).unwrap_or(catalog::UNKNOWN));
    }

    let rest = [
        ("description", extraction::description(document)),
        ("category", extraction::category(document)),
        ("review rating", extraction::review_rating_word(document)),
        ("image", extraction::image_url_relative(document)),
    ];
    for (key, value) in rest {
        println!("{} :  {}", key, value);
    }
}

fn print_record(record: &ProductRecord) {
    println!("\nTransformed information:\n========================\n");
    for (key, value) in COLUMNS.iter().zip(record.as_row()) {
        println!("{} :  {}", key, value);
    }
    println!();
}

fn print_category_summary(report: &CategoryReport) {
    println!(
        "<{}>: {}/{} books, {} images -> {}",
        report.name,
        report.records_written,
        report.products_found,
        report.images_written,
        report.csv_path.display()
    );
    for failure in &report.failures {
        println!("  skipped {} ({})", failure.url, failure.reason);
    }
    for failure in &report.missing_images {
        println!("  no image {} ({})", failure.url, failure.reason);
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("{} (y/n) ", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        if stdin.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        match answer.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => continue,
        }
    }
}
