/*
[INPUT]:  Endpoint arguments (path values, query/header/form values, files)
[OUTPUT]: Encoded request parts ready for the shared client
[POS]:    HTTP layer - parameter encoding and request assembly
[UPDATE]: When adding parameter kinds or changing encoding rules
*/

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;

use crate::http::{ApiError, Result};

/// Converts a value into its wire string form
pub trait ToParameter {
    fn to_parameter(&self) -> String;
}

impl ToParameter for str {
    fn to_parameter(&self) -> String {
        self.to_string()
    }
}

impl ToParameter for String {
    fn to_parameter(&self) -> String {
        self.clone()
    }
}

macro_rules! display_parameter {
    ($($ty:ty),*) => {
        $(impl ToParameter for $ty {
            fn to_parameter(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_parameter!(i32, i64, u32, u64, f32, f64, bool);

impl ToParameter for DateTime<Utc> {
    fn to_parameter(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl ToParameter for crate::types::UploadDataType {
    fn to_parameter(&self) -> String {
        self.as_str().to_string()
    }
}

impl<T: ToParameter> ToParameter for [T] {
    fn to_parameter(&self) -> String {
        self.iter()
            .map(ToParameter::to_parameter)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: ToParameter> ToParameter for Vec<T> {
    fn to_parameter(&self) -> String {
        self.as_slice().to_parameter()
    }
}

impl<T: ToParameter + ?Sized> ToParameter for &T {
    fn to_parameter(&self) -> String {
        (**self).to_parameter()
    }
}

/// Endpoint path with `{name}` placeholders
#[derive(Debug, Clone)]
pub struct PathTemplate {
    path: String,
}

impl PathTemplate {
    pub fn new(template: &str) -> Self {
        Self {
            path: template.replace("{format}", "json"),
        }
    }

    /// Replace `{name}` with the percent-encoded value
    pub fn param(mut self, name: &str, value: impl ToParameter) -> Self {
        let value = value.to_parameter();
        self.path = self
            .path
            .replace(&format!("{{{name}}}"), &urlencoding::encode(&value));
        self
    }

    pub fn build(self) -> String {
        self.path
    }
}

/// File part of a multipart request
#[derive(Debug, Clone)]
pub struct FileParameter {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl FileParameter {
    pub fn from_bytes(name: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            content_type: None,
            bytes,
        }
    }

    /// Drain a reader into a file part
    pub fn from_reader(name: &str, file_name: Option<&str>, mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| ApiError::File {
                path: file_name.unwrap_or_default().into(),
                source,
            })?;
        Ok(Self {
            name: name.to_string(),
            file_name: file_name.map(str::to_string),
            content_type: None,
            bytes,
        })
    }

    /// Read a file from disk; the part's file name is the path's final component
    pub async fn from_path(name: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            file_name: path
                .file_name()
                .and_then(|file_name| file_name.to_str())
                .map(str::to_string),
            content_type: None,
            bytes,
        })
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part> {
        let mut part = reqwest::multipart::Part::bytes(self.bytes);
        if let Some(file_name) = self.file_name {
            part = part.file_name(file_name);
        }
        let content_type = self
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream");
        part.mime_str(content_type)
            .map_err(|err| ApiError::Config(format!("invalid content type {content_type}: {err}")))
    }
}

/// One endpoint call, fully described
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub operation: &'static str,
    pub method: Method,
    pub path: String,
    pub query_params: BTreeMap<String, String>,
    pub header_params: BTreeMap<String, String>,
    pub form_params: BTreeMap<String, String>,
    pub file_params: BTreeMap<String, FileParameter>,
    pub body: Option<serde_json::Value>,
    pub auth_settings: &'static [&'static str],
}

impl ApiRequest {
    pub fn new(operation: &'static str, method: Method, path: String) -> Self {
        Self {
            operation,
            method,
            path,
            query_params: BTreeMap::new(),
            header_params: BTreeMap::new(),
            form_params: BTreeMap::new(),
            file_params: BTreeMap::new(),
            body: None,
            auth_settings: &[],
        }
    }

    pub fn auth(mut self, auth_settings: &'static [&'static str]) -> Self {
        self.auth_settings = auth_settings;
        self
    }

    pub fn query<T: ToParameter>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.query_params.insert(name.to_string(), value.to_parameter());
        }
        self
    }

    pub fn header<T: ToParameter>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.header_params.insert(name.to_string(), value.to_parameter());
        }
        self
    }

    pub fn form<T: ToParameter>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.form_params.insert(name.to_string(), value.to_parameter());
        }
        self
    }

    /// Add a file part named after [`FileParameter::name`]
    pub fn file(mut self, file: Option<FileParameter>) -> Self {
        if let Some(file) = file {
            self.file_params.insert(file.name().to_string(), file);
        }
        self
    }

    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(PathTemplate::new("/gear/{id}").param("id", "b1231"), "/gear/b1231")]
    #[case(PathTemplate::new("/uploads/{uploadId}").param("uploadId", 9_876_543_210i64), "/uploads/9876543210")]
    #[case(PathTemplate::new("/gear/{id}").param("id", "a b/c"), "/gear/a%20b%2Fc")]
    #[case(PathTemplate::new("/athlete.{format}"), "/athlete.json")]
    fn test_path_template(#[case] template: PathTemplate, #[case] expected: &str) {
        assert_eq!(template.build(), expected);
    }

    #[rstest]
    #[case(true.to_parameter(), "true")]
    #[case(42i32.to_parameter(), "42")]
    #[case(vec![1i64, 2, 3].to_parameter(), "1,2,3")]
    #[case(crate::types::UploadDataType::FitGz.to_parameter(), "fit.gz")]
    fn test_to_parameter(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_datetime_parameter_is_rfc3339() {
        let at = Utc.with_ymd_and_hms(2018, 2, 16, 14, 52, 54).unwrap();
        assert_eq!(at.to_parameter(), "2018-02-16T14:52:54Z");
    }

    #[test]
    fn test_absent_optionals_are_skipped() {
        let request = ApiRequest::new("createUpload", Method::POST, "/uploads".to_string())
            .form("name", Some("Evening Run"))
            .form::<&str>("description", None)
            .query::<i32>("page", None)
            .file(None);

        assert_eq!(request.form_params.len(), 1);
        assert_eq!(request.form_params["name"], "Evening Run");
        assert!(request.query_params.is_empty());
        assert!(request.file_params.is_empty());
    }

    #[test]
    fn test_file_parameter_from_reader() {
        let data: &[u8] = b"<gpx></gpx>";
        let file = FileParameter::from_reader("file", Some("ride.gpx"), data).unwrap();
        assert_eq!(file.name(), "file");
        assert_eq!(file.file_name(), Some("ride.gpx"));
        assert_eq!(file.bytes(), data);
        assert_eq!(file.len(), 11);
    }

    #[test]
    fn test_file_part_keyed_by_parameter_name() {
        let request = ApiRequest::new("createUpload", Method::POST, "/uploads".to_string())
            .file(Some(FileParameter::from_bytes("data", "ride.fit", vec![1, 2])));

        assert_eq!(request.file_params.len(), 1);
        assert_eq!(request.file_params["data"].file_name(), Some("ride.fit"));
    }

    #[tokio::test]
    async fn test_file_parameter_missing_path() {
        let err = FileParameter::from_path("file", "/nonexistent/ride.fit")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::File { .. }));
        assert_eq!(err.status_code(), 0);
    }
}
