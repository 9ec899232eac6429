//! Raw GET command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Session;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path relative to the API root, query string included
    /// (e.g. `news/operations/detail-news?news_id=7`)
    pub path: String,
}

pub async fn run(session: &Session, args: GetArgs) -> Result<()> {
    let payload = session
        .client
        .get_json(&args.path)
        .await
        .with_context(|| format!("Failed to GET {}", args.path))?;

    session.print(&payload)
}
