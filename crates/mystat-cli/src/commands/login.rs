//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Session;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {}

pub async fn run(session: &Session, _args: LoginArgs) -> Result<()> {
    output::progress("Logging in...");

    let portal_session = session.client.login().await.context("Failed to login")?;
    let info = session
        .client
        .user_info()
        .await
        .context("Failed to fetch profile")?;

    output::success("Logged in successfully");
    output::fields(&[
        ("Name", info.full_name),
        ("Student ID", info.student_id.to_string()),
        ("Group", info.group_name.unwrap_or_else(|| "-".to_string())),
        ("Group ID", info.current_group_id.to_string()),
        ("Expires", portal_session.expires_at().to_rfc3339()),
    ]);

    Ok(())
}
