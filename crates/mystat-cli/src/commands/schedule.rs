//! Schedule command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use super::Session;

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Day to show, as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Show the whole month containing the date
    #[arg(long)]
    pub month: bool,
}

pub async fn run(session: &Session, args: ScheduleArgs) -> Result<()> {
    let lessons = if args.month {
        session.client.month_schedule(args.date).await
    } else {
        session.client.schedule_by_date(args.date).await
    }
    .context("Failed to fetch schedule")?;

    session.print(&lessons)
}
