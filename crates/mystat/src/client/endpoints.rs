//! Endpoint paths, relative to the API root.

use chrono::{Datelike, NaiveDate};

pub const USER_INFO: &str = "settings/user-info";
pub const USER_SETTINGS: &str = "profile/operations/settings";
pub const MONTH_SCHEDULE: &str = "schedule/operations/get-month";
pub const DAY_SCHEDULE: &str = "schedule/operations/get-by-date";
pub const REVIEWS: &str = "reviews/index/list";
pub const VISITS: &str = "progress/operations/student-visits";
pub const ATTENDANCE: &str = "dashboard/chart/attendance";
pub const HOMEWORK_LIST: &str = "homework/operations/list";
pub const HOMEWORK_CREATE: &str = "homework/operations/create";
pub const HOMEWORK_DELETE: &str = "homework/operations/delete";
pub const HOMEWORK_COUNT: &str = "count/homework";
pub const GROUP_HISTORY: &str = "homework/settings/group-history";
pub const LATEST_NEWS: &str = "news/operations/latest-news";
pub const NEWS_DETAILS: &str = "news/operations/detail-news";
pub const ALL_EXAMS: &str = "progress/operations/student-exams";
pub const FUTURE_EXAMS: &str = "dashboard/info/future-exams";
pub const STREAM_LEADERS: &str = "dashboard/progress/leader-stream";
pub const GROUP_LEADERS: &str = "dashboard/progress/leader-group";
pub const ACTIVITY: &str = "dashboard/progress/activity";
pub const ACTIVITY_LOG: &str = "dashboard/progress/activity-web";

/// Formats a date the way the schedule filter expects: `2024-3-7`, no padding.
pub fn date_filter(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

pub fn with_date(path: &str, date: NaiveDate) -> String {
    format!("{}?date_filter={}", path, date_filter(date))
}
