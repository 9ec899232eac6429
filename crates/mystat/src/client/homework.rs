//! Homework listing and submission.

use serde_json::json;
use tracing::{info, instrument};

use crate::error::{Error, InvalidInputError};
use crate::http::{FilePart, MultipartBody, RequestSpec};
use crate::models::{HomeworkCount, HomeworkKind, HomeworkPage, HomeworkStatus, UploadedHomework};

use super::endpoints;
use super::{Client, decode};

/// Time reported as spent when the caller does not say.
const UNSPECIFIED_SPENT_TIME: u32 = 99;

/// Filter for a homework listing. Defaults to the first page of active homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeworkQuery {
    pub page: u32,
    pub status: HomeworkStatus,
    pub kind: HomeworkKind,
}

impl Default for HomeworkQuery {
    fn default() -> Self {
        Self {
            page: 1,
            status: HomeworkStatus::Active,
            kind: HomeworkKind::Homework,
        }
    }
}

impl HomeworkQuery {
    pub fn status(status: HomeworkStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn kind(mut self, kind: HomeworkKind) -> Self {
        self.kind = kind;
        self
    }

    fn path(&self, group_id: i64) -> String {
        format!(
            "{}?page={}&status={}&type={}&group_id={}",
            endpoints::HOMEWORK_LIST,
            self.page,
            self.status.code(),
            self.kind.code(),
            group_id
        )
    }
}

/// A homework submission: answer text, a file, or both.
#[derive(Debug, Clone)]
pub struct HomeworkUpload {
    homework_id: i64,
    answer: Option<String>,
    file: Option<FilePart>,
    spent_hours: Option<u32>,
    spent_minutes: Option<u32>,
}

impl HomeworkUpload {
    /// Submit a text answer.
    pub fn answer(homework_id: i64, text: impl Into<String>) -> Self {
        Self {
            homework_id,
            answer: Some(text.into()),
            file: None,
            spent_hours: None,
            spent_minutes: None,
        }
    }

    /// Submit a file.
    pub fn file(homework_id: i64, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            homework_id,
            answer: None,
            file: Some(Self::file_part(file_name.into(), bytes)),
            spent_hours: None,
            spent_minutes: None,
        }
    }

    /// Add answer text alongside a file.
    pub fn with_answer(mut self, text: impl Into<String>) -> Self {
        self.answer = Some(text.into());
        self
    }

    /// Attach a file alongside an answer.
    pub fn with_file(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.file = Some(Self::file_part(file_name.into(), bytes));
        self
    }

    /// Set the MIME type of the attached file.
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.mime = Some(mime.into());
        }
        self
    }

    /// Report how long the work took.
    pub fn with_spent_time(mut self, hours: u32, minutes: u32) -> Self {
        self.spent_hours = Some(hours);
        self.spent_minutes = Some(minutes);
        self
    }

    pub fn homework_id(&self) -> i64 {
        self.homework_id
    }

    fn file_part(file_name: String, bytes: Vec<u8>) -> FilePart {
        FilePart {
            field: "file".to_string(),
            file_name,
            bytes,
            mime: None,
        }
    }

    fn to_body(&self) -> Result<MultipartBody, Error> {
        let answer = self.answer.as_deref().filter(|a| !a.is_empty());
        if answer.is_none() && self.file.is_none() {
            return Err(InvalidInputError::EmptyUpload {
                homework_id: self.homework_id,
            }
            .into());
        }

        let mut body = MultipartBody::new().text("id", self.homework_id.to_string());
        if let Some(answer) = answer {
            body = body.text("answerText", answer);
        }
        if let Some(file) = &self.file {
            body = body.file(file.clone());
        }
        Ok(body
            .text(
                "spentTimeHour",
                self.spent_hours.unwrap_or(UNSPECIFIED_SPENT_TIME).to_string(),
            )
            .text(
                "spentTimeMin",
                self.spent_minutes.unwrap_or(UNSPECIFIED_SPENT_TIME).to_string(),
            ))
    }
}

impl Client {
    /// List homework for the student's current group.
    ///
    /// The group id is looked up through [`Client::user_info`] on first use
    /// and reused afterwards.
    #[instrument(skip(self))]
    pub async fn homework_list(&self, query: HomeworkQuery) -> Result<HomeworkPage, Error> {
        let group_id = self.group_id().await?;
        self.get(&query.path(group_id)).await
    }

    /// Homework counters per status.
    #[instrument(skip(self))]
    pub async fn homework_count(&self) -> Result<Vec<HomeworkCount>, Error> {
        self.get(endpoints::HOMEWORK_COUNT).await
    }

    /// Submit homework.
    ///
    /// Only the authorization retry applies here; other failures are not
    /// retried, so a submission is never sent twice because of them.
    #[instrument(skip(self, upload), fields(homework_id = upload.homework_id()))]
    pub async fn upload_homework(&self, upload: &HomeworkUpload) -> Result<UploadedHomework, Error> {
        let spec = RequestSpec::post_multipart(endpoints::HOMEWORK_CREATE, upload.to_body()?);
        let uploaded: UploadedHomework = decode(self.execute(spec).await?)?;
        info!(submission = uploaded.id, "Homework uploaded");
        Ok(uploaded)
    }

    /// Delete a homework submission. Returns the portal's confirmation flag.
    #[instrument(skip(self))]
    pub async fn delete_homework(&self, homework_id: i64) -> Result<bool, Error> {
        let spec = RequestSpec::post_json(endpoints::HOMEWORK_DELETE, json!({ "id": homework_id }));
        decode(self.execute(spec).await?)
    }
}
