//! Fetch URLs from the command line and print their metadata.
//!
//! ```text
//! cargo run --example fetch -- https://deno.land/std@0.69.0/path/mod.ts out/
//! RUST_LOG=filefetch=debug cargo run --example fetch -- file:///etc/hosts out/
//! ```
//!
//! Every argument but the last is a URL; the last one is the directory the
//! files are written to.

use color_eyre::{eyre::eyre, Result};
use comfy_table::Table;
use filefetch::{FetchTarget, FetcherBuilder};
use reqwest::Url;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let directory = args
        .pop()
        .ok_or_else(|| eyre!("usage: fetch <url>... <directory>"))?;
    if args.is_empty() {
        return Err(eyre!("usage: fetch <url>... <directory>"));
    }
    std::fs::create_dir_all(&directory)?;

    let targets = args
        .iter()
        .map(|raw| -> Result<FetchTarget> {
            let url = Url::parse(raw)?;
            Ok(FetchTarget::in_directory(&url, &directory)?)
        })
        .collect::<Result<Vec<_>>>()?;

    let fetcher = FetcherBuilder::new().concurrent_fetches(4).build()?;
    let results = fetcher.fetch_all(&targets).await;

    for (target, result) in targets.iter().zip(results) {
        match result {
            Ok(metadata) => {
                println!("{} -> {}", metadata.url(), target.destination().display());
                if let Some(headers) = metadata.headers() {
                    let mut names: Vec<_> = headers.keys().collect();
                    names.sort();

                    let mut table = Table::new();
                    table.set_header(vec!["header", "value"]);
                    for name in names {
                        table.add_row(vec![name.as_str(), headers[name].as_str()]);
                    }
                    println!("{table}");
                }
            }
            Err(e) => println!("{} failed: {}", target.url(), e),
        }
    }

    Ok(())
}
