use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::documents::DocumentSet;

/// Identifier wrapper for vehicles held by the storage collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    /// Vehicles created from the edit form arrive without an id until first saved.
    pub fn is_unassigned(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "Disponible")]
    Available,
    #[serde(rename = "No Disponible")]
    Unavailable,
}

impl VehicleStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Unavailable => "No Disponible",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Disponible" => Some(Self::Available),
            "No Disponible" => Some(Self::Unavailable),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleVisibility {
    #[serde(rename = "Visible")]
    Visible,
    #[serde(rename = "No Visible")]
    Hidden,
}

impl VehicleVisibility {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visible => "Visible",
            Self::Hidden => "No Visible",
        }
    }
}

/// Metadata for one uploaded document; the file itself lives in external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDocument {
    pub name: String,
    pub file_reference: String,
    pub upload_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub expiration_date: Option<NaiveDate>,
}

/// Inbound document upload before it is stamped with an upload date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub name: String,
    pub file_reference: String,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub expiration_date: Option<NaiveDate>,
}

impl DocumentUpload {
    pub fn new(name: impl Into<String>, file_reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_reference: file_reference.into(),
            expiration_date: None,
        }
    }

    pub fn expiring_on(mut self, expiration_date: NaiveDate) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    pub(crate) fn into_document(self, uploaded_on: NaiveDate) -> VehicleDocument {
        VehicleDocument {
            name: self.name,
            file_reference: self.file_reference,
            upload_date: uploaded_on,
            expiration_date: self.expiration_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: VehicleId,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub status: VehicleStatus,
    pub visibility: VehicleVisibility,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub next_inspection: Option<NaiveDate>,
    #[serde(default)]
    pub next_service_km: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub insurance_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub documents: DocumentSet,
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. Anything else reads as no date.
pub fn parse_lenient_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_date(trimmed).ok().or_else(|| {
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    })
}

pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

/// Stored date as it appears in inbound data; non-string values are kept only to be discarded.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDate::Text(value)) => parse_lenient_date(&value),
        Some(RawDate::Other(_)) | None => None,
    })
}
