use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Textual layout of a UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidFormat {
    /// 8-4-4-4-12 groups separated by hyphens
    #[default]
    Hyphenated,
    /// 32 hex digits, no separators
    Simple,
    /// RFC 4122 URN, `urn:uuid:` followed by the hyphenated form
    Urn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UuidOutput {
    pub format: UuidFormat,
    pub uuids: Vec<String>,
}

/// Render a UUID in the requested layout
pub fn format_uuid(id: &Uuid, format: UuidFormat, uppercase: bool) -> String {
    match (format, uppercase) {
        (UuidFormat::Hyphenated, false) => format!("{:x}", id.hyphenated()),
        (UuidFormat::Hyphenated, true) => format!("{:X}", id.hyphenated()),
        (UuidFormat::Simple, false) => format!("{:x}", id.simple()),
        (UuidFormat::Simple, true) => format!("{:X}", id.simple()),
        // The URN prefix stays lowercase
        (UuidFormat::Urn, false) => format!("urn:uuid:{:x}", id.hyphenated()),
        (UuidFormat::Urn, true) => format!("urn:uuid:{:X}", id.hyphenated()),
    }
}

pub fn build_uuid_output(ids: &[Uuid], format: UuidFormat, uppercase: bool) -> UuidOutput {
    UuidOutput {
        format,
        uuids: ids
            .iter()
            .map(|id| format_uuid(id, format, uppercase))
            .collect(),
    }
}
