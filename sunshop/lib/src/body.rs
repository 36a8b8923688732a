//! Request bodies.
//!
//! - [`RequestBody::Json`] - serialized JSON with `Content-Type: application/json`
//! - [`RequestBody::Multipart`] - form fields and file uploads; the HTTP stack
//!   writes the `multipart/form-data` content type with its boundary
//! - [`RequestBody::Empty`] - no body at all
//!
//! [`FormPayload`] keeps fields in an inspectable, ordered form until the
//! request is sent, so the client can append a `_method` override.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::error::ClientError;

/// Form field carrying the tunnelled verb of a multipart update.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON document.
    Json(serde_json::Value),
    /// Multipart form.
    Multipart(FormPayload),
}

/// A file attached to a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    file_name: String,
    mime_type: Option<String>,
    bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload from in-memory bytes.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    /// Sets the MIME type sent with the part.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Reads an upload from disk, naming it after the file.
    ///
    /// ## Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    /// Returns the file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type, if one was set.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Returns the file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn into_part(self) -> Result<Part, ClientError> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime_type {
            Some(mime) => part.mime_str(&mime).map_err(ClientError::Request),
            None => Ok(part),
        }
    }
}

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text value.
    Text(String),
    /// File upload.
    File(FileUpload),
}

/// Ordered multipart form.
///
/// ## Examples
///
/// ```rust
/// use sunshop_lib::{FileUpload, FormPayload};
///
/// let form = FormPayload::new()
///     .text("name", "Batteries")
///     .file("image", FileUpload::new("battery.png", vec![0u8; 4]));
/// assert_eq!(form.text_value("name"), Some("Batteries"));
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, FormValue)>,
}

impl FormPayload {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    /// Appends a text field when `value` is present.
    pub fn text_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Appends a file field.
    pub fn file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
        self.fields.push((name.into(), FormValue::File(file)));
        self
    }

    /// Appends a text field in place.
    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .push((name.into(), FormValue::Text(value.into())));
    }

    /// Returns the fields in insertion order.
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// Returns the first text value stored under `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(field, value)| match value {
            FormValue::Text(text) if field == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts into a `reqwest` multipart form.
    ///
    /// ## Errors
    ///
    /// Returns an error if a file's MIME type is not a valid media type.
    pub fn into_form(self) -> Result<Form, ClientError> {
        self.fields
            .into_iter()
            .try_fold(Form::new(), |form, (name, value)| match value {
                FormValue::Text(text) => Ok(form.text(name, text)),
                FormValue::File(file) => Ok(form.part(name, file.into_part()?)),
            })
    }
}
