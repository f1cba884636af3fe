use anyhow::Result;
use chrono::Local;
use clap::Parser;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info, warn};

mod cli;
mod config;
mod models;
mod parsers;
mod scrapers;
mod storage;
mod utils;

use crate::cli::Args;
use crate::config::{Config, TheaterConfig};
use crate::models::MovieSchedule;
use crate::parsers::classify;
use crate::scrapers::scraper_for;
use crate::storage::{JsonFileSink, ScheduleSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("showtime_monitor=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!("Starting Showtime Monitor");

    // Load configuration
    let config = Config::load()?;

    let mut theaters: Vec<TheaterConfig> = config.theaters.clone();
    if let Some(name) = &args.theater {
        theaters.retain(|theater| &theater.theater_name == name);
        if theaters.is_empty() {
            anyhow::bail!("Theater '{}' not found in roster", name);
        }
    }
    if let Some(limit) = args.limit {
        theaters.truncate(limit);
    }

    // Initialize HTTP client with connection pooling
    let client = Arc::new(utils::http::create_client(&config.user_agent)?);

    let scrape_date = Local::now().format("%Y-%m-%d").to_string();
    info!("Scraping {} theaters for {}", theaters.len(), scrape_date);

    // Scrape all theaters concurrently; the normalization layer is
    // stateless, so nothing here needs synchronization.
    let scraping_futures = theaters.iter().map(|theater| {
        let client = client.clone();
        let scrape_date = scrape_date.clone();

        async move {
            let chain = classify(&theater.theater_name);
            info!(
                "Processing theater: {} (chain: {})",
                theater.theater_name,
                chain.key().to_uppercase()
            );

            let scraper = scraper_for(chain);

            match scraper.scrape(&client, &theater.schedule_url).await {
                Ok(movies) => {
                    if movies.is_empty() {
                        warn!("No movies found for {}", theater.theater_name);
                    } else {
                        info!("Found {} movies at {}", movies.len(), theater.theater_name);
                    }
                    Some(MovieSchedule {
                        theater_name: theater.theater_name.clone(),
                        theater_name_en: theater.theater_name_en.clone(),
                        address: theater.address.clone(),
                        latitude: theater.latitude,
                        longitude: theater.longitude,
                        movies,
                        scrape_date,
                    })
                }
                Err(e) => {
                    error!("Error scraping {}: {}", theater.theater_name, e);
                    None
                }
            }
        }
    });

    let schedules: Vec<MovieSchedule> = join_all(scraping_futures)
        .await
        .into_iter()
        .flatten()
        .collect();

    let sink = match &args.output {
        Some(path) => JsonFileSink::at(path.clone()),
        None => JsonFileSink::dated(&config.output_dir),
    };
    let path = sink.write(&schedules).await?;

    info!(
        "Scraped {} of {} theaters, results saved to {}",
        schedules.len(),
        theaters.len(),
        path.display()
    );

    Ok(())
}
