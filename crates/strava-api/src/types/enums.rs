/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Level of detail a returned resource carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ResourceState {
    Meta,
    Summary,
    Detail,
}

impl TryFrom<i32> for ResourceState {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ResourceState::Meta),
            2 => Ok(ResourceState::Summary),
            3 => Ok(ResourceState::Detail),
            other => Err(format!("unknown resource_state {other}")),
        }
    }
}

impl From<ResourceState> for i32 {
    fn from(value: ResourceState) -> Self {
        match value {
            ResourceState::Meta => 1,
            ResourceState::Summary => 2,
            ResourceState::Detail => 3,
        }
    }
}

/// Bike frame type, only present on bikes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum FrameType {
    Mountain,
    Cross,
    Road,
    TimeTrial,
}

impl TryFrom<i32> for FrameType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FrameType::Mountain),
            2 => Ok(FrameType::Cross),
            3 => Ok(FrameType::Road),
            4 => Ok(FrameType::TimeTrial),
            other => Err(format!("unknown frame_type {other}")),
        }
    }
}

impl From<FrameType> for i32 {
    fn from(value: FrameType) -> Self {
        match value {
            FrameType::Mountain => 1,
            FrameType::Cross => 2,
            FrameType::Road => 3,
            FrameType::TimeTrial => 4,
        }
    }
}

/// Format of an uploaded activity file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadDataType {
    #[serde(rename = "fit")]
    Fit,
    #[serde(rename = "fit.gz")]
    FitGz,
    #[serde(rename = "tcx")]
    Tcx,
    #[serde(rename = "tcx.gz")]
    TcxGz,
    #[serde(rename = "gpx")]
    Gpx,
    #[serde(rename = "gpx.gz")]
    GpxGz,
}

impl UploadDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadDataType::Fit => "fit",
            UploadDataType::FitGz => "fit.gz",
            UploadDataType::Tcx => "tcx",
            UploadDataType::TcxGz => "tcx.gz",
            UploadDataType::Gpx => "gpx",
            UploadDataType::GpxGz => "gpx.gz",
        }
    }

    /// Infer the data type from a file name such as `ride.fit.gz`
    pub fn from_file_name(name: impl AsRef<Path>) -> Option<Self> {
        let name = name.as_ref().file_name()?.to_str()?.to_ascii_lowercase();
        [
            UploadDataType::FitGz,
            UploadDataType::TcxGz,
            UploadDataType::GpxGz,
            UploadDataType::Fit,
            UploadDataType::Tcx,
            UploadDataType::Gpx,
        ]
        .into_iter()
        .find(|data_type| name.ends_with(&format!(".{}", data_type.as_str())))
    }
}

impl fmt::Display for UploadDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadDataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fit" => Ok(UploadDataType::Fit),
            "fit.gz" => Ok(UploadDataType::FitGz),
            "tcx" => Ok(UploadDataType::Tcx),
            "tcx.gz" => Ok(UploadDataType::TcxGz),
            "gpx" => Ok(UploadDataType::Gpx),
            "gpx.gz" => Ok(UploadDataType::GpxGz),
            other => Err(format!("unsupported data type '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("morning_ride.fit", Some(UploadDataType::Fit))]
    #[case("morning_ride.FIT.GZ", Some(UploadDataType::FitGz))]
    #[case("/tmp/run.tcx.gz", Some(UploadDataType::TcxGz))]
    #[case("hike.gpx", Some(UploadDataType::Gpx))]
    #[case("notes.txt", None)]
    #[case("gpx", None)]
    fn test_data_type_from_file_name(#[case] name: &str, #[case] expected: Option<UploadDataType>) {
        assert_eq!(UploadDataType::from_file_name(name), expected);
    }

    #[test]
    fn test_data_type_serde_uses_wire_names() {
        let json = serde_json::to_string(&UploadDataType::GpxGz).unwrap();
        assert_eq!(json, r#""gpx.gz""#);
        let parsed: UploadDataType = serde_json::from_str(r#""tcx""#).unwrap();
        assert_eq!(parsed, UploadDataType::Tcx);
        assert_eq!("FIT".parse::<UploadDataType>(), Ok(UploadDataType::Fit));
    }

    #[test]
    fn test_resource_state_rejects_unknown() {
        let state: ResourceState = serde_json::from_str("3").unwrap();
        assert_eq!(state, ResourceState::Detail);
        assert!(serde_json::from_str::<ResourceState>("7").is_err());
        assert_eq!(serde_json::to_string(&FrameType::Road).unwrap(), "3");
    }
}
