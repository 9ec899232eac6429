//! Leaderboards and reward activity.

use serde::{Deserialize, Serialize};

/// A leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    #[serde(default)]
    pub id: Option<i64>,
    pub position: i64,
    pub amount: i64,
    pub full_name: String,
    #[serde(default)]
    pub photo_path: Option<String>,
}

/// Rewards earned on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub activity_log: Vec<ActivityEntry>,
    pub date: String,
}

/// A single reward event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub achievements_id: i64,
    pub achievements_type: i64,
    pub action: i64,
    pub badge: i64,
    pub current_point: i64,
    pub point_types_id: i64,
    #[serde(default)]
    pub subject_mark: Option<i64>,
    pub date: String,
    pub achievements_name: AchievementKind,
    pub point_types_name: PointKind,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub old_competition: bool,
}

/// What the reward was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementKind {
    #[serde(rename = "EVALUATION_LESSON_MARK")]
    LessonRate,
    #[serde(rename = "PAIR_VISIT")]
    PairVisit,
    #[serde(rename = "ASSESMENT")]
    Assessment,
    #[serde(rename = "HOMETASK_INTIME")]
    HomeworkCompleted,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    #[serde(rename = "DIAMOND")]
    Diamond,
    #[serde(rename = "COIN")]
    Coin,
    #[serde(other)]
    Other,
}
