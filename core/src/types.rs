//! Domain DTOs for the notary backend.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Read-side types
//! ignore fields they do not know about, so the backend can grow its
//! payloads without breaking the page.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which notary service a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Remote,
    Mobile,
    Bulk,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [ServiceType::Remote, ServiceType::Mobile, ServiceType::Bulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Remote => "remote",
            ServiceType::Mobile => "mobile",
            ServiceType::Bulk => "bulk",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Kind of document the customer wants notarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    RealEstate,
    PowerAttorney,
    WillTrust,
    Loan,
    Affidavit,
    Contract,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        DocumentType::RealEstate,
        DocumentType::PowerAttorney,
        DocumentType::WillTrust,
        DocumentType::Loan,
        DocumentType::Affidavit,
        DocumentType::Contract,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::RealEstate => "real-estate",
            DocumentType::PowerAttorney => "power-attorney",
            DocumentType::WillTrust => "will-trust",
            DocumentType::Loan => "loan",
            DocumentType::Affidavit => "affidavit",
            DocumentType::Contract => "contract",
            DocumentType::Other => "other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// How quickly the customer needs a response.
///
/// The contact form always sends `Normal`; nothing in the page sets `Urgent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
}

/// Outbound payload for `POST /contact/submit`.
///
/// Optional fields that are `None` are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: ServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
}

/// Success payload of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub message: String,
    /// Opaque booking reference issued by the server.
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_response: Option<String>,
}

/// Service category name -> human-readable schedule, e.g. `"remote" -> "24/7"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessHours(BTreeMap<String, String>);

impl BusinessHours {
    pub fn get(&self, category: &str) -> Option<&str> {
        self.0.get(category).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BusinessHours {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        BusinessHours(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub business_name: String,
    pub notary_name: String,
    pub license: String,
    pub phone: String,
    pub email: String,
    pub service_area: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessStats {
    pub documents_notarized: String,
    pub average_rating: String,
    pub average_session_time: String,
    pub service_availability: String,
}

/// One of the three bookable services. `base_price` is `None` for
/// quote-only services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub base_price: Option<f64>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub availability: String,
}

/// Add-on priced on top of a base service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalService {
    pub id: Uuid,
    pub service: String,
    pub price: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelFee {
    pub area: String,
    /// Free-form: `"$0"`, `"$25"`, `"$1/mile"`.
    pub fee: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageAreas {
    pub mobile_areas: Vec<String>,
    pub remote_areas: Vec<String>,
    #[serde(default)]
    pub travel_fees: Vec<TravelFee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub date: String,
}
