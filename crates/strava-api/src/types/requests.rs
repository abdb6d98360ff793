/*
[INPUT]:  Endpoint arguments supplied by callers
[OUTPUT]: Typed request structs consumed by the endpoint methods
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use crate::http::FileParameter;

use super::enums::UploadDataType;

/// Arguments for `POST /uploads`
#[derive(Debug, Clone, Default)]
pub struct CreateUploadRequest {
    pub file: Option<FileParameter>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub trainer: Option<String>,
    pub commute: Option<String>,
    pub data_type: Option<UploadDataType>,
    pub external_id: Option<String>,
}

impl CreateUploadRequest {
    /// Start a request for the given activity file.
    ///
    /// The data type is inferred from the file name when it has a known
    /// extension.
    pub fn new(file: FileParameter) -> Self {
        let data_type = file
            .file_name()
            .and_then(UploadDataType::from_file_name);
        Self {
            file: Some(file),
            data_type,
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn trainer(mut self, trainer: impl Into<String>) -> Self {
        self.trainer = Some(trainer.into());
        self
    }

    pub fn commute(mut self, commute: impl Into<String>) -> Self {
        self.commute = Some(commute.into());
        self
    }

    pub fn data_type(mut self, data_type: UploadDataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_infers_data_type() {
        let file = FileParameter::from_bytes("file", "ride.gpx", b"<gpx/>".to_vec());
        let request = CreateUploadRequest::new(file).name("Lunch Ride");
        assert_eq!(request.data_type, Some(UploadDataType::Gpx));
        assert_eq!(request.name.as_deref(), Some("Lunch Ride"));
        assert!(request.description.is_none());
    }

    #[test]
    fn test_explicit_data_type_wins() {
        let file = FileParameter::from_bytes("file", "export.bin", vec![0u8; 4]);
        let request = CreateUploadRequest::new(file).data_type(UploadDataType::Fit);
        assert_eq!(request.data_type, Some(UploadDataType::Fit));
    }
}
