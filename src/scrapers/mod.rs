use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::models::{ChainId, Movie};

mod aeon;
mod generic;
mod movix;
mod tjoy;
mod toho;
mod united;

pub use aeon::AeonScraper;
pub use generic::GenericScraper;
pub use movix::MovixScraper;
pub use tjoy::TjoyScraper;
pub use toho::TohoScraper;
pub use united::UnitedScraper;

#[async_trait]
pub trait ScheduleScraper: Send + Sync {
    async fn scrape(&self, client: &Client, url: &str) -> Result<Vec<Movie>>;
    fn chain(&self) -> ChainId;
}

/// Pick the scraper for a chain. `Other` gets the generic best-effort
/// scraper.
pub fn scraper_for(chain: ChainId) -> Box<dyn ScheduleScraper> {
    match chain {
        ChainId::Toho => Box::new(TohoScraper),
        ChainId::Movix => Box::new(MovixScraper),
        ChainId::Aeon => Box::new(AeonScraper),
        ChainId::Tjoy => Box::new(TjoyScraper),
        ChainId::United => Box::new(UnitedScraper),
        ChainId::Other => Box::new(GenericScraper),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scraper_dispatch_matches_chain() {
        for chain in [
            ChainId::Toho,
            ChainId::Movix,
            ChainId::Aeon,
            ChainId::Tjoy,
            ChainId::United,
            ChainId::Other,
        ] {
            assert_eq!(scraper_for(chain).chain(), chain);
        }
    }
}
