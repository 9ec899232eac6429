//! Progress command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use super::Session;

#[derive(Args, Debug)]
pub struct ProgressArgs {}

pub async fn run(session: &Session, _args: ProgressArgs) -> Result<()> {
    let client = &session.client;

    // The three requests share one login.
    let (visits, attendance, reviews) =
        tokio::try_join!(client.visits(), client.attendance(), client.reviews())
            .context("Failed to fetch progress")?;

    session.print(&json!({
        "visits": visits,
        "attendance": attendance,
        "reviews": reviews,
    }))
}
