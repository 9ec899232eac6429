//! Profile command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Session;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Show account settings instead of the profile summary
    #[arg(long)]
    pub settings: bool,

    /// Show the groups the student has belonged to
    #[arg(long, conflicts_with = "settings")]
    pub groups: bool,
}

pub async fn run(session: &Session, args: ProfileArgs) -> Result<()> {
    if args.settings {
        let settings = session
            .client
            .user_settings()
            .await
            .context("Failed to fetch settings")?;
        session.print(&settings)
    } else if args.groups {
        let groups = session
            .client
            .group_history()
            .await
            .context("Failed to fetch group history")?;
        session.print(&groups)
    } else {
        let info = session
            .client
            .user_info()
            .await
            .context("Failed to fetch profile")?;
        session.print(&info)
    }
}
