use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::info;

use crate::models::{ChainId, Movie};
use crate::parsers::{clean_text, normalize_showtime, normalize_title, RawShowtime};
use crate::scrapers::ScheduleScraper;
use crate::utils::http::fetch_with_retry;

pub struct MovixScraper;

#[async_trait]
impl ScheduleScraper for MovixScraper {
    async fn scrape(&self, client: &Client, url: &str) -> Result<Vec<Movie>> {
        info!("Scraping MOVIX schedule...");

        let response = fetch_with_retry(client, url, 3).await?;
        let html = response.text().await?;

        let movies = extract_movies(&html)?;
        info!("Found {} movies with showtimes on MOVIX page", movies.len());

        Ok(movies)
    }

    fn chain(&self) -> ChainId {
        ChainId::Movix
    }
}

/// MOVIX listings put the runtime note in full-width parentheses after
/// the title, and showtimes as single "start～end" strings.
fn extract_movies(html: &str) -> Result<Vec<Movie>> {
    let document = Html::parse_document(html);
    let section_selector = Selector::parse("div.list")
        .map_err(|_| anyhow::anyhow!("Failed to parse section selector"))?;

    let mut movies = Vec::new();

    for section in document.select(&section_selector) {
        let title = if let Ok(title_selector) = Selector::parse("h2") {
            section
                .select(&title_selector)
                .next()
                .map(|elem| clean_text(&elem.text().collect::<String>()))
        } else {
            None
        };
        let Some(raw_title) = title else { continue };

        // Cut the （上映時間: 151分） style suffix before normalizing.
        let raw_title = raw_title
            .split('（')
            .next()
            .unwrap_or(raw_title.as_str())
            .trim()
            .to_string();

        let mut showtimes = Vec::new();
        if let Ok(time_selector) = Selector::parse("p.time") {
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

        let normalized = normalize_title(&raw_title, ChainId::Movix);
        movies.push(Movie::new(normalized, showtimes));
    }

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowtimeInterval;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
        <div class="list">
            <h2>ラストマイル（上映時間: 129分）</h2>
            <p class="time">11:45～　14:50</p>
            <p class="time">途中入場不可</p>
        </div>
    "#;

    #[test]
    fn truncates_runtime_suffix_and_splits_ranges() {
        let movies = extract_movies(SAMPLE).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "ラストマイル");
        assert_eq!(
            movies[0].showtimes,
            vec![ShowtimeInterval::new("11:45", "14:50")]
        );
    }
}
