//! Exams command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Session;

#[derive(Args, Debug)]
pub struct ExamsArgs {
    /// Only upcoming exams
    #[arg(long)]
    pub future: bool,
}

pub async fn run(session: &Session, args: ExamsArgs) -> Result<()> {
    let exams = if args.future {
        session.client.future_exams().await
    } else {
        session.client.all_exams().await
    }
    .context("Failed to fetch exams")?;

    session.print(&exams)
}
