//! Order identifiers, uploaded-file metadata, and the submitted order payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::customer::CustomerInfo;
use super::geometry::FileGeometry;
use super::part::PartConfiguration;
use super::quote::PriceQuote;
use super::service::ServiceKind;

/// Portal prefix on every order identifier.
const ORDER_ID_PREFIX: &str = "BX";

/// An order identifier.
///
/// Authoritative identifiers come from the intake service. The
/// [`OrderId::placeholder`] constructor produces a client-generated stand-in
/// (`BX` + base-36 timestamp) shown when the intake call fails; it is never
/// a confirmation of durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Wrap an identifier issued by the intake service.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Client-generated placeholder identifier for the current instant.
    pub fn placeholder() -> Self {
        Self::placeholder_at(Utc::now().timestamp_millis())
    }

    /// Client-generated placeholder identifier for a given Unix-ms timestamp.
    pub fn placeholder_at(unix_millis: i64) -> Self {
        let millis = unix_millis.max(0) as u64;
        Self(format!("{ORDER_ID_PREFIX}{}", base36_upper(millis)))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encode a number in uppercase base-36.
fn base36_upper(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ASCII")
}

/// Metadata for the file the user attached in the intake step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Original file name, including extension.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl UploadedFile {
    /// Create uploaded-file metadata.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Lowercase extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_ascii_lowercase())
        }
    }

    /// Human-readable file size (`"1.5 MB"`).
    pub fn human_size(&self) -> String {
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
        if self.size_bytes == 0 {
            return "0 Bytes".to_string();
        }
        let exp = ((self.size_bytes as f64).ln() / 1024f64.ln()).floor() as usize;
        let exp = exp.min(UNITS.len() - 1);
        let value = self.size_bytes as f64 / 1024f64.powi(exp as i32);
        let rounded = (value * 100.0).round() / 100.0;
        format!("{rounded} {}", UNITS[exp])
    }
}

/// File section of a submitted order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFileMeta {
    /// Original file name.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Extracted or placeholder geometry.
    pub geometry: FileGeometry,
}

/// The immutable payload handed to the order intake collaborator.
///
/// Assembled once when the submission gate passes; the configurator does not
/// retry delivery or track it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// The fabrication service ordered.
    pub service: ServiceKind,
    /// Uploaded file metadata and geometry.
    pub file: OrderFileMeta,
    /// The part configuration as reviewed.
    pub configuration: PartConfiguration,
    /// The quote as reviewed.
    pub pricing: PriceQuote,
    /// Customer contact details.
    pub customer: CustomerInfo,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}
