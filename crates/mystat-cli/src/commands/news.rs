//! News command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Session;

#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Show the full text of one announcement
    #[arg(long)]
    pub id: Option<i64>,
}

pub async fn run(session: &Session, args: NewsArgs) -> Result<()> {
    match args.id {
        Some(id) => {
            let details = session
                .client
                .news_details(id)
                .await
                .with_context(|| format!("Failed to fetch announcement {}", id))?;
            session.print(&details)
        }
        None => {
            let news = session
                .client
                .latest_news()
                .await
                .context("Failed to fetch news")?;
            session.print(&news)
        }
    }
}
