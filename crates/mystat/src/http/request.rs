//! Description of a single logical request.

use std::time::Duration;

use reqwest::multipart::{Form, Part};

use crate::error::{Error, InvalidInputError};

/// HTTP method of a portal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Everything needed to issue one request: method, path relative to the API
/// root, optional body and an optional per-call deadline.
///
/// A spec is rebuilt into a fresh HTTP request on every attempt, so the
/// authorization retry sends exactly the same body twice.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: RequestBody,
    pub(crate) timeout: Option<Duration>,
}

impl RequestSpec {
    /// A GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    /// A POST request with a JSON body.
    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: RequestBody::Json(body),
            timeout: None,
        }
    }

    /// A POST request with a multipart form body.
    pub fn post_multipart(path: impl Into<String>, body: MultipartBody) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: RequestBody::Multipart(body),
            timeout: None,
        }
    }

    /// Override the client's default deadline for this call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Request payload encodings understood by the portal.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

/// A multipart form kept as plain data so it can be re-encoded per attempt.
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    fields: Vec<(String, String)>,
    files: Vec<FilePart>,
}

/// A file attached to a multipart body.
#[derive(Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("mime", &self.mime)
            .finish()
    }
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a file field.
    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn files(&self) -> &[FilePart] {
        &self.files
    }

    pub(crate) fn to_form(&self) -> Result<Form, Error> {
        let mut form = Form::new();
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        for file in &self.files {
            let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            if let Some(mime) = &file.mime {
                part = part.mime_str(mime).map_err(|_| InvalidInputError::Other {
                    message: format!("invalid MIME type '{}' for {}", mime, file.file_name),
                })?;
            }
            form = form.part(file.field.clone(), part);
        }
        Ok(form)
    }
}
