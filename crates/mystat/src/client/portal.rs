//! Read-only portal endpoints.

use chrono::{Local, NaiveDate};
use tracing::instrument;

use crate::error::Error;
use crate::models::{
    ActivityEntry, ActivityLog, AttendanceEntry, Exam, GroupInfo, LessonVisit, NewsDetails,
    NewsEntry, Review, ScheduleEntry, StudentInfo, UserInfo, UserSettings,
};

use super::Client;
use super::endpoints::{self, with_date};

impl Client {
    /// Profile summary, including the current group id.
    #[instrument(skip(self))]
    pub async fn user_info(&self) -> Result<UserInfo, Error> {
        self.get(endpoints::USER_INFO).await
    }

    /// Account settings (contacts, linked accounts).
    #[instrument(skip(self))]
    pub async fn user_settings(&self) -> Result<UserSettings, Error> {
        self.get(endpoints::USER_SETTINGS).await
    }

    /// Lessons for the month containing `date` (today when `None`).
    #[instrument(skip(self))]
    pub async fn month_schedule(&self, date: Option<NaiveDate>) -> Result<Vec<ScheduleEntry>, Error> {
        self.get(&with_date(endpoints::MONTH_SCHEDULE, date.unwrap_or_else(today)))
            .await
    }

    /// Lessons on `date` (today when `None`).
    #[instrument(skip(self))]
    pub async fn schedule_by_date(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ScheduleEntry>, Error> {
        self.get(&with_date(endpoints::DAY_SCHEDULE, date.unwrap_or_else(today)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn reviews(&self) -> Result<Vec<Review>, Error> {
        self.get(endpoints::REVIEWS).await
    }

    /// Lesson attendance with marks.
    #[instrument(skip(self))]
    pub async fn visits(&self) -> Result<Vec<LessonVisit>, Error> {
        self.get(endpoints::VISITS).await
    }

    #[instrument(skip(self))]
    pub async fn attendance(&self) -> Result<Vec<AttendanceEntry>, Error> {
        self.get(endpoints::ATTENDANCE).await
    }

    #[instrument(skip(self))]
    pub async fn latest_news(&self) -> Result<Vec<NewsEntry>, Error> {
        self.get(endpoints::LATEST_NEWS).await
    }

    #[instrument(skip(self))]
    pub async fn news_details(&self, news_id: i64) -> Result<NewsDetails, Error> {
        self.get(&format!("{}?news_id={}", endpoints::NEWS_DETAILS, news_id))
            .await
    }

    /// Every exam result on record.
    #[instrument(skip(self))]
    pub async fn all_exams(&self) -> Result<Vec<Exam>, Error> {
        self.get(endpoints::ALL_EXAMS).await
    }

    #[instrument(skip(self))]
    pub async fn future_exams(&self) -> Result<Vec<Exam>, Error> {
        self.get(endpoints::FUTURE_EXAMS).await
    }

    /// Leaderboard across the whole stream.
    #[instrument(skip(self))]
    pub async fn stream_leaders(&self) -> Result<Vec<StudentInfo>, Error> {
        self.get(endpoints::STREAM_LEADERS).await
    }

    /// Leaderboard within the student's group.
    #[instrument(skip(self))]
    pub async fn group_leaders(&self) -> Result<Vec<StudentInfo>, Error> {
        self.get(endpoints::GROUP_LEADERS).await
    }

    #[instrument(skip(self))]
    pub async fn activity(&self) -> Result<Vec<ActivityEntry>, Error> {
        self.get(endpoints::ACTIVITY).await
    }

    /// Reward activity grouped by day.
    #[instrument(skip(self))]
    pub async fn activity_log(&self) -> Result<Vec<ActivityLog>, Error> {
        self.get(endpoints::ACTIVITY_LOG).await
    }

    /// Groups the student has belonged to, with their subjects.
    #[instrument(skip(self))]
    pub async fn group_history(&self) -> Result<Vec<GroupInfo>, Error> {
        self.get(endpoints::GROUP_HISTORY).await
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
