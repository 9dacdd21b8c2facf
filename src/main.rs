mod fetch;
mod listing;
mod parser;
mod records;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;
use tracing::info;

#[derive(Parser)]
#[command(name = "gsv_scraper", about = "Doctor directory scraper for guiasaludyvida.com")]
struct Cli {
    /// Max doctor profiles to process per listing (default: all)
    #[arg(short = 'n', long)]
    limit: Option<usize>,
    /// Output file for the scraped records
    #[arg(short, long, default_value = "doctors.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let client = fetch::client()?;

    let mut doctors = Vec::new();
    let mut counts = RunCounts::default();

    for base_url in listing::BASE_URLS {
        let specialty = listing::specialty_for_url(base_url);
        info!("Fetching listing: {}", base_url);
        let Some(body) = fetch::page(&client, base_url).await else {
            counts.listings_failed += 1;
            continue;
        };
        let mut links = listing::profile_links(&Html::parse_document(&body));
        if let Some(n) = cli.limit {
            links.truncate(n);
        }
        println!("{}: {} profiles ({})", specialty, links.len(), base_url);

        let pb = ProgressBar::new(links.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
                .progress_chars("=> "),
        );

        for href in links {
            let url = listing::resolve_url(&href);
            match fetch::page(&client, &url).await {
                Some(body) => {
                    let doc = Html::parse_document(&body);
                    match parser::process_profile(&doc, &url, specialty) {
                        Some(record) => {
                            records::merge_record(&mut doctors, record);
                            counts.processed += 1;
                        }
                        None => counts.no_biography += 1,
                    }
                }
                None => counts.fetch_failed += 1,
            }
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    records::write_records(&cli.output, &doctors)?;
    println!("Saved {} doctors to {}.", doctors.len(), cli.output.display());
    counts.print();

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

#[derive(Default)]
struct RunCounts {
    processed: usize,
    no_biography: usize,
    fetch_failed: usize,
    listings_failed: usize,
}

impl RunCounts {
    fn print(&self) {
        println!(
            "{} profiles processed, {} without biography, {} fetch failures, {} listings unreachable.",
            self.processed, self.no_biography, self.fetch_failed, self.listings_failed,
        );
    }
}
