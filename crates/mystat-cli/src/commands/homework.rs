//! Homework subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand, ValueEnum};
use mystat::HomeworkQuery;
use mystat::HomeworkUpload;
use mystat::models::{HomeworkKind, HomeworkStatus};

use super::Session;
use crate::output;

#[derive(Args, Debug)]
pub struct HomeworkCommand {
    #[command(subcommand)]
    pub command: HomeworkSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum HomeworkSubcommand {
    /// List homework for the current group
    List(ListArgs),

    /// Show homework counters per status
    Count,

    /// Submit an answer, a file, or both
    Upload(UploadArgs),

    /// Delete a submission
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = StatusArg::Active)]
    pub status: StatusArg,

    #[arg(long = "type", value_enum, default_value_t = KindArg::Homework)]
    pub kind: KindArg,

    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Homework id
    #[arg(long)]
    pub id: i64,

    /// Answer text
    #[arg(long)]
    pub answer: Option<String>,

    /// File to attach
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Hours spent
    #[arg(long)]
    pub hours: Option<u32>,

    /// Minutes spent
    #[arg(long)]
    pub minutes: Option<u32>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Submission id
    #[arg(long)]
    pub id: i64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StatusArg {
    Checked,
    Uploaded,
    Active,
    Deleted,
    Overdue,
}

impl From<StatusArg> for HomeworkStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Checked => HomeworkStatus::Checked,
            StatusArg::Uploaded => HomeworkStatus::Uploaded,
            StatusArg::Active => HomeworkStatus::Active,
            StatusArg::Deleted => HomeworkStatus::Deleted,
            StatusArg::Overdue => HomeworkStatus::Overdue,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindArg {
    Homework,
    Lab,
}

impl From<KindArg> for HomeworkKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Homework => HomeworkKind::Homework,
            KindArg::Lab => HomeworkKind::Lab,
        }
    }
}

pub async fn handle(session: &Session, cmd: HomeworkCommand) -> Result<()> {
    match cmd.command {
        HomeworkSubcommand::List(args) => list(session, args).await,
        HomeworkSubcommand::Count => count(session).await,
        HomeworkSubcommand::Upload(args) => upload(session, args).await,
        HomeworkSubcommand::Delete(args) => delete(session, args).await,
    }
}

async fn list(session: &Session, args: ListArgs) -> Result<()> {
    let query = HomeworkQuery::status(args.status.into())
        .kind(args.kind.into())
        .page(args.page);

    let page = session
        .client
        .homework_list(query)
        .await
        .context("Failed to list homework")?;

    if let Some(meta) = page.meta {
        tracing::debug!(page = meta.current_page, total = meta.total_pages, "Listed homework");
    }
    session.print(&page.items)
}

async fn count(session: &Session) -> Result<()> {
    let counters = session
        .client
        .homework_count()
        .await
        .context("Failed to count homework")?;
    session.print(&counters)
}

async fn upload(session: &Session, args: UploadArgs) -> Result<()> {
    let mut upload = match (&args.answer, &args.file) {
        (None, None) => bail!("Nothing to upload. Pass --answer, --file, or both."),
        (Some(answer), None) => HomeworkUpload::answer(args.id, answer),
        (answer, Some(path)) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("Not a file name: {}", path.display()))?;
            let upload = HomeworkUpload::file(args.id, file_name, bytes);
            match answer {
                Some(answer) => upload.with_answer(answer),
                None => upload,
            }
        }
    };

    if args.hours.is_some() || args.minutes.is_some() {
        upload = upload.with_spent_time(args.hours.unwrap_or(0), args.minutes.unwrap_or(0));
    }

    let uploaded = session
        .client
        .upload_homework(&upload)
        .await
        .context("Failed to upload homework")?;

    output::success(&format!("Uploaded homework {}", args.id));
    session.print(&uploaded)
}

async fn delete(session: &Session, args: DeleteArgs) -> Result<()> {
    let deleted = session
        .client
        .delete_homework(args.id)
        .await
        .context("Failed to delete homework")?;

    if !deleted {
        bail!("Portal refused to delete submission {}", args.id);
    }
    output::success(&format!("Deleted submission {}", args.id));
    Ok(())
}
