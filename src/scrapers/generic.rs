use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use crate::models::{ChainId, Movie};
use crate::parsers::{clean_text, normalize_showtime, normalize_title, RawShowtime};
use crate::scrapers::ScheduleScraper;
use crate::utils::http::fetch_with_retry;

/// Selector candidates tried in order; the first one that matches
/// anything wins.
const SECTION_CANDIDATES: &[&str] = &[
    ".movie-item",
    ".schedule-movie",
    ".movie",
    "article",
    ".content-block",
];
const TITLE_CANDIDATES: &[&str] = &[".title", "h2", "h3", "strong"];
const TIME_CANDIDATES: &[&str] = &[".time", ".showtime", "time", ".schedule-time"];

/// Best-effort scraper for theaters outside the known chains.
pub struct GenericScraper;

#[async_trait]
impl ScheduleScraper for GenericScraper {
    async fn scrape(&self, client: &Client, url: &str) -> Result<Vec<Movie>> {
        info!("Using generic scraper for {}", url);

        let response = fetch_with_retry(client, url, 3).await?;
        let html = response.text().await?;

        let movies = extract_movies(&html)?;
        if movies.is_empty() {
            warn!("Generic scraper found no movie sections at {}", url);
        } else {
            info!("Found {} movies with showtimes via generic scraper", movies.len());
        }

        Ok(movies)
    }

    fn chain(&self) -> ChainId {
        ChainId::Other
    }
}

fn extract_movies(html: &str) -> Result<Vec<Movie>> {
    let document = Html::parse_document(html);

    let mut movies = Vec::new();

    for section in select_first_nonempty(&document, SECTION_CANDIDATES) {
        let Some(raw_title) = pick_first_text(&section, TITLE_CANDIDATES) else {
            continue;
        };
        if raw_title.is_empty() {
            continue;
        }

        let mut showtimes = Vec::new();
        for candidate in TIME_CANDIDATES {
            let Ok(selector) = Selector::parse(candidate) else {
                continue;
            };
            let raws: Vec<String> = section
                .select(&selector)
                .map(|elem| clean_text(&elem.text().collect::<String>()))
                .filter(|text| text.chars().any(|c| c.is_ascii_digit()))
                .collect();
            if raws.is_empty() {
                continue;
            }
            for raw in &raws {
                if let Some(interval) = normalize_showtime(&RawShowtime::Range(raw)) {
                    showtimes.push(interval);
                }
            }
            break;
        }

        if showtimes.is_empty() {
            continue;
        }

        let normalized = normalize_title(&raw_title, ChainId::Other);
        movies.push(Movie::new(normalized, showtimes));
    }

    Ok(movies)
}

/// Run each candidate selector until one matches at least one element.
fn select_first_nonempty<'a>(document: &'a Html, candidates: &[&str]) -> Vec<ElementRef<'a>> {
    for candidate in candidates {
        let Ok(selector) = Selector::parse(candidate) else {
            continue;
        };
        let matches: Vec<_> = document.select(&selector).collect();
        if !matches.is_empty() {
            return matches;
        }
    }
    Vec::new()
}

fn pick_first_text(element: &ElementRef<'_>, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        let Ok(selector) = Selector::parse(candidate) else {
            continue;
        };
        if let Some(elem) = element.select(&selector).next() {
            return Some(clean_text(&elem.text().collect::<String>()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowtimeInterval;
    use pretty_assertions::assert_eq;

    #[test]
    fn falls_through_selector_candidates() {
        let html = r#"
            <article>
                <h3>カメラを止めるな！（デジタル）</h3>
                <span class="showtime">18:00～19:40</span>
            </article>
        "#;
        let movies = extract_movies(html).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "カメラを止めるな！(デジタル)");
        assert_eq!(
            movies[0].showtimes,
            vec![ShowtimeInterval::new("18:00", "19:40")]
        );
    }

    #[test]
    fn unsplittable_times_drop_the_movie() {
        let html = r#"
            <div class="movie-item">
                <h2>上映時間未定</h2>
                <span class="time">18時の回</span>
            </div>
        "#;
        let movies = extract_movies(html).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn page_without_known_structure_yields_nothing() {
        let movies = extract_movies("<p>休館日</p>").unwrap();
        assert!(movies.is_empty());
    }
}
