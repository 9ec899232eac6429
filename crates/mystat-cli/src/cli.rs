//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use mystat::types::DEFAULT_API_URL;

use crate::commands::{activity, exams, get, homework, leaders, login, news, profile, progress, schedule};

/// Command-line client for the MyStat student portal.
#[derive(Parser, Debug)]
#[command(name = "mystat")]
#[command(author, version = env!("MYSTAT_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// How to reach and sign in to the portal.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Portal username
    #[arg(long, env = "MYSTAT_USERNAME", global = true)]
    pub username: Option<String>,

    /// Portal password
    #[arg(long, env = "MYSTAT_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// API root URL
    #[arg(long, env = "MYSTAT_BASE_URL", default_value = DEFAULT_API_URL, global = true)]
    pub base_url: String,

    /// Locale sent with every request
    #[arg(long, env = "MYSTAT_LANGUAGE", default_value = "en", global = true)]
    pub language: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and show the session and profile summary
    Login(login::LoginArgs),

    /// Show the student profile
    Profile(profile::ProfileArgs),

    /// Show the timetable
    Schedule(schedule::ScheduleArgs),

    /// List, count, submit or delete homework
    Homework(homework::HomeworkCommand),

    /// Show announcements
    News(news::NewsArgs),

    /// Show exam results
    Exams(exams::ExamsArgs),

    /// Show leaderboards
    Leaders(leaders::LeadersArgs),

    /// Show reward activity
    Activity(activity::ActivityArgs),

    /// Show visits, attendance and teacher reviews
    Progress(progress::ProgressArgs),

    /// GET an arbitrary path under the API root and print the raw JSON
    Get(get::GetArgs),
}
