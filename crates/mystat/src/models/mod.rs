//! Payload shapes returned by the portal.
//!
//! Each endpoint's reply is decoded into one of these types. Required fields
//! are required: a reply missing one is reported as a decode error rather
//! than returned half-filled.

mod dashboard;
mod homework;
mod news;
mod profile;
mod progress;
mod schedule;

pub use dashboard::{AchievementKind, ActivityEntry, ActivityLog, PointKind, StudentInfo};
pub use homework::{
    Homework, HomeworkComment, HomeworkCount, HomeworkKind, HomeworkMetadata, HomeworkPage,
    HomeworkStatus, UploadedHomework,
};
pub use news::{NewsDetails, NewsEntry};
pub use profile::{
    AzureAccount, CityData, GamingPoint, Group, GroupInfo, GroupSpec, ProfileLink, Phone, UserInfo,
    UserSettings, Visibility,
};
pub use progress::{AttendanceEntry, Exam, LessonVisit, Review};
pub use schedule::ScheduleEntry;
