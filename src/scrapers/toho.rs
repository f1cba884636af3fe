use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::info;

use crate::models::{ChainId, Movie};
use crate::parsers::{clean_text, normalize_showtime, normalize_title, RawShowtime};
use crate::scrapers::ScheduleScraper;
use crate::utils::http::fetch_with_retry;

pub struct TohoScraper;

#[async_trait]
impl ScheduleScraper for TohoScraper {
    async fn scrape(&self, client: &Client, url: &str) -> Result<Vec<Movie>> {
        info!("Scraping TOHO Cinemas schedule...");

        let response = fetch_with_retry(client, url, 3).await?;
        let html = response.text().await?;

        let movies = extract_movies(&html)?;
        info!("Found {} movies with showtimes on TOHO page", movies.len());

        Ok(movies)
    }

    fn chain(&self) -> ChainId {
        ChainId::Toho
    }
}

/// TOHO schedule pages carry start and end in separate spans inside each
/// `p.time` block.
fn extract_movies(html: &str) -> Result<Vec<Movie>> {
    let document = Html::parse_document(html);
    let section_selector = Selector::parse("div.schedule-body-section-item")
        .map_err(|_| anyhow::anyhow!("Failed to parse section selector"))?;

    let mut movies = Vec::new();

    for section in document.select(&section_selector) {
        let title = if let Ok(title_selector) = Selector::parse("h5.schedule-body-title") {
            section
                .select(&title_selector)
                .next()
                .map(|elem| clean_text(&elem.text().collect::<String>()))
        } else {
            None
        };
        let Some(raw_title) = title else { continue };

        let mut showtimes = Vec::new();
        if let Ok(time_selector) = Selector::parse("p.time") {
            for time_elem in section.select(&time_selector) {
                let start = pick_text(&time_elem, "span.start");
                let end = pick_text(&time_elem, "span.end");
                if let (Some(start), Some(end)) = (start, end) {
                    if let Some(interval) = normalize_showtime(&RawShowtime::Pair(&start, &end)) {
                        showtimes.push(interval);
                    }
                }
            }
        }

        // Movies without a single showtime are not listed.
        if showtimes.is_empty() {
            continue;
        }

        let normalized = normalize_title(&raw_title, ChainId::Toho);
        movies.push(Movie::new(normalized, showtimes));
    }

    Ok(movies)
}

fn pick_text(element: &scraper::ElementRef<'_>, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    element
        .select(&selector)
        .next()
        .map(|elem| clean_text(&elem.text().collect::<String>()))
}
