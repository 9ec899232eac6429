//! Leaders command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Session;

#[derive(Args, Debug)]
pub struct LeadersArgs {
    /// Rank across the stream instead of the group
    #[arg(long)]
    pub stream: bool,
}

pub async fn run(session: &Session, args: LeadersArgs) -> Result<()> {
    let leaders = if args.stream {
        session.client.stream_leaders().await
    } else {
        session.client.group_leaders().await
    }
    .context("Failed to fetch leaderboard")?;

    session.print(&leaders)
}
