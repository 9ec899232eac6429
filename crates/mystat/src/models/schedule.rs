//! Timetable entries.

use serde::{Deserialize, Serialize};

/// One lesson in the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: String,
    pub started_at: String,
    pub finished_at: String,
    pub room_name: String,
    pub subject_name: String,
    pub teacher_name: String,
    pub lesson: i64,
}
