//! Marks, visits, exams and teacher reviews.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub date: String,
    pub full_spec: String,
    pub message: String,
    pub spec: String,
    pub teacher: String,
}

/// One attended (or missed) lesson with its marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonVisit {
    pub spec_id: i64,
    pub lesson_number: i64,
    pub status_was: i64,
    #[serde(default)]
    pub class_work_mark: Option<i64>,
    #[serde(default)]
    pub control_work_mark: Option<i64>,
    #[serde(default)]
    pub home_work_mark: Option<i64>,
    #[serde(default)]
    pub lab_work_mark: Option<i64>,
    pub date_visit: String,
    pub spec_name: String,
    pub lesson_theme: String,
    pub teacher_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub date: String,
    pub has_rasp: bool,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub previous_points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub exam_id: i64,
    #[serde(default)]
    pub id_file: Option<i64>,
    pub mark: i64,
    #[serde(default)]
    pub mark_type: Option<i64>,
    #[serde(default)]
    pub need_access: Option<i64>,
    pub date: String,
    pub spec: String,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub comment_delete_file: Option<String>,
    #[serde(default)]
    pub comment_teach: Option<String>,
    #[serde(default)]
    pub ex_file_name: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub need_access_stud: Option<bool>,
}
