use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::info;

use crate::models::{ChainId, Movie};
use crate::parsers::{clean_text, normalize_title, pair_showtimes};
use crate::scrapers::ScheduleScraper;
use crate::utils::http::fetch_with_retry;

pub struct UnitedScraper;

#[async_trait]
impl ScheduleScraper for UnitedScraper {
    async fn scrape(&self, client: &Client, url: &str) -> Result<Vec<Movie>> {
        info!("Scraping United Cinemas schedule...");

        let response = fetch_with_retry(client, url, 3).await?;
        let html = response.text().await?;

        let movies = extract_movies(&html)?;
        info!("Found {} movies with showtimes on United page", movies.len());

        Ok(movies)
    }

    fn chain(&self) -> ChainId {
        ChainId::United
    }
}

/// United Cinemas lists starts and ends as two parallel element
/// sequences; they are paired by position.
fn extract_movies(html: &str) -> Result<Vec<Movie>> {
    let document = Html::parse_document(html);
    let section_selector = Selector::parse("li.clearfix")
        .map_err(|_| anyhow::anyhow!("Failed to parse section selector"))?;

    let mut movies = Vec::new();

    for section in document.select(&section_selector) {
        let title = if let Ok(title_selector) = Selector::parse("span.movieTitle") {
            section
                .select(&title_selector)
                .next()
                .map(|elem| clean_text(&elem.text().collect::<String>()))
        } else {
            None
        };
        let Some(raw_title) = title else { continue };

        let starts = collect_texts(&section, "li.startTime");
        let ends = collect_texts(&section, "li.endTime");
        let showtimes = pair_showtimes(&starts, &ends);

        if showtimes.is_empty() {
            continue;
        }

        let normalized = normalize_title(&raw_title, ChainId::United);
        movies.push(Movie::new(normalized, showtimes));
    }

    Ok(movies)
}

fn collect_texts(element: &scraper::ElementRef<'_>, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    element
        .select(&selector)
        .map(|elem| clean_text(&elem.text().collect::<String>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScreenType, ShowtimeInterval, Subtitle};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
        <li class="clearfix">
            <span class="movieTitle">IMAXデューン 砂の惑星（字幕版）</span>
            <ul>
                <li class="startTime">09:30</li>
                <li class="startTime">13:00</li>
                <li class="startTime">16:30</li>
                <li class="endTime">～12:15</li>
                <li class="endTime">～15:45</li>
            </ul>
        </li>
    "#;

    #[test]
    fn pairs_parallel_sequences_and_truncates_to_shorter() {
        let movies = extract_movies(SAMPLE).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "デューン 砂の惑星");
        assert_eq!(movies[0].screen_type, ScreenType::Imax);
        // 字幕 sat past the truncation point, so the chain's own reading
        // reports the original audio.
        assert_eq!(movies[0].subtitle, Subtitle::Original);
        assert_eq!(
            movies[0].showtimes,
            vec![
                ShowtimeInterval::new("09:30", "12:15"),
                ShowtimeInterval::new("13:00", "15:45"),
            ]
        );
    }
}
