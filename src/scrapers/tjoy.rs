use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::info;

use crate::models::{ChainId, Movie};
use crate::parsers::{clean_text, normalize_showtime, normalize_title, RawShowtime};
use crate::scrapers::ScheduleScraper;
use crate::utils::http::fetch_with_retry;

pub struct TjoyScraper;

#[async_trait]
impl ScheduleScraper for TjoyScraper {
    async fn scrape(&self, client: &Client, url: &str) -> Result<Vec<Movie>> {
        info!("Scraping T-JOY schedule...");

        let response = fetch_with_retry(client, url, 3).await?;
        let html = response.text().await?;

        let movies = extract_movies(&html)?;
        info!("Found {} movies with showtimes on T-JOY page", movies.len());

        Ok(movies)
    }

    fn chain(&self) -> ChainId {
        ChainId::Tjoy
    }
}

/// T-JOY titles look like 【IMAX・字幕】デーヴァラ(PG12); the markers and
/// the rating suffix come off in normalization.
fn extract_movies(html: &str) -> Result<Vec<Movie>> {
    let document = Html::parse_document(html);
    let section_selector = Selector::parse("section.section-container")
        .map_err(|_| anyhow::anyhow!("Failed to parse section selector"))?;

    let mut movies = Vec::new();

    for section in document.select(&section_selector) {
        let title = if let Ok(title_selector) = Selector::parse("h5.js-title-film") {
            section
                .select(&title_selector)
                .next()
                .map(|elem| clean_text(&elem.text().collect::<String>()))
        } else {
            None
        };
        let Some(raw_title) = title else { continue };

        let mut showtimes = Vec::new();
        if let Ok(time_selector) = Selector::parse("p.schedule-time") {
            for time_elem in section.select(&time_selector) {
                let raw = clean_text(&time_elem.text().collect::<String>());
                if let Some(interval) = normalize_showtime(&RawShowtime::Range(&raw)) {
                    showtimes.push(interval);
                }
            }
        }

        if showtimes.is_empty() {
            continue;
        }

        let normalized = normalize_title(&raw_title, ChainId::Tjoy);
        movies.push(Movie::new(normalized, showtimes));
    }

    Ok(movies)
}
