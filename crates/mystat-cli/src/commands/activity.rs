//! Activity command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Session;

#[derive(Args, Debug)]
pub struct ActivityArgs {
    /// Group rewards by day
    #[arg(long)]
    pub log: bool,
}

pub async fn run(session: &Session, args: ActivityArgs) -> Result<()> {
    if args.log {
        let log = session
            .client
            .activity_log()
            .await
            .context("Failed to fetch activity log")?;
        session.print(&log)
    } else {
        let entries = session
            .client
            .activity()
            .await
            .context("Failed to fetch activity")?;
        session.print(&entries)
    }
}
