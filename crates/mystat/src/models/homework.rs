//! Homework assignments and submissions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an assignment, as used by the listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum HomeworkStatus {
    Checked,
    Uploaded,
    #[default]
    Active,
    Deleted,
    Overdue,
}

impl HomeworkStatus {
    pub fn code(self) -> i64 {
        match self {
            HomeworkStatus::Checked => 1,
            HomeworkStatus::Uploaded => 2,
            HomeworkStatus::Active => 3,
            HomeworkStatus::Deleted => 5,
            HomeworkStatus::Overdue => 6,
        }
    }
}

impl TryFrom<i64> for HomeworkStatus {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(HomeworkStatus::Checked),
            2 => Ok(HomeworkStatus::Uploaded),
            3 => Ok(HomeworkStatus::Active),
            5 => Ok(HomeworkStatus::Deleted),
            6 => Ok(HomeworkStatus::Overdue),
            other => Err(format!("unknown homework status {}", other)),
        }
    }
}

impl From<HomeworkStatus> for i64 {
    fn from(status: HomeworkStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HomeworkStatus::Checked => "checked",
            HomeworkStatus::Uploaded => "uploaded",
            HomeworkStatus::Active => "active",
            HomeworkStatus::Deleted => "deleted",
            HomeworkStatus::Overdue => "overdue",
        };
        f.write_str(name)
    }
}

/// Regular homework or lab work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum HomeworkKind {
    #[default]
    Homework,
    Lab,
}

impl HomeworkKind {
    pub fn code(self) -> i64 {
        match self {
            HomeworkKind::Homework => 0,
            HomeworkKind::Lab => 1,
        }
    }
}

impl TryFrom<i64> for HomeworkKind {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HomeworkKind::Homework),
            1 => Ok(HomeworkKind::Lab),
            other => Err(format!("unknown homework type {}", other)),
        }
    }
}

impl From<HomeworkKind> for i64 {
    fn from(kind: HomeworkKind) -> Self {
        kind.code()
    }
}

/// An assignment as listed by `homework/operations/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    pub id: i64,
    pub id_group: i64,
    pub id_spec: i64,
    pub id_teach: i64,
    pub name_spec: String,
    pub theme: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub creation_time: String,
    pub completion_time: String,
    #[serde(default)]
    pub overdue_time: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    pub fio_teach: String,
    #[serde(default)]
    pub homework_comment: Option<HomeworkComment>,
    #[serde(default)]
    pub homework_stud: Option<UploadedHomework>,
    pub status: HomeworkStatus,
}

/// Teacher feedback on a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkComment {
    #[serde(default)]
    pub text_comment: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub attachment_path: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
}

/// A student's submission, also returned by the upload call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedHomework {
    pub id: i64,
    #[serde(default)]
    pub mark: Option<i64>,
    pub creation_time: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub stud_answer: Option<String>,
    #[serde(default)]
    pub tmp_file: Option<String>,
    #[serde(default)]
    pub auto_mark: bool,
}

/// Counter row of `count/homework`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkCount {
    pub counter_type: i64,
    pub counter: i64,
}

impl HomeworkCount {
    /// The status this counter refers to, if it is one the client knows.
    pub fn status(&self) -> Option<HomeworkStatus> {
        HomeworkStatus::try_from(self.counter_type).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkMetadata {
    #[serde(rename = "currentPage")]
    pub current_page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// One page of a homework listing.
///
/// The portal answers either with a bare array or with a
/// `{data, _meta}` envelope; both decode into this type, with `meta` only
/// present for the latter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeworkPage {
    pub items: Vec<Homework>,
    pub meta: Option<HomeworkMetadata>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HomeworkListing {
    Paged {
        data: Vec<Homework>,
        #[serde(rename = "_meta")]
        meta: HomeworkMetadata,
    },
    Plain(Vec<Homework>),
}

impl<'de> Deserialize<'de> for HomeworkPage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match HomeworkListing::deserialize(deserializer)? {
            HomeworkListing::Paged { data, meta } => HomeworkPage {
                items: data,
                meta: Some(meta),
            },
            HomeworkListing::Plain(items) => HomeworkPage { items, meta: None },
        })
    }
}
