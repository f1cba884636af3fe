use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "showtime-monitor",
    about = "Scrape movie showtime schedules from Japanese cinema chain websites"
)]
pub struct Args {
    /// Scrape only the theater with this exact name
    #[arg(long)]
    pub theater: Option<String>,

    /// Limit the number of theaters to scrape
    #[arg(long)]
    pub limit: Option<usize>,

    /// Write output to this file instead of the dated file under data/
    #[arg(long)]
    pub output: Option<PathBuf>,
}
