//! Stateless HTTP request builder and response parser for the notary API.
//!
//! # Design
//! `NotaryClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `ApiService` executes the round-trip in between, so everything here stays
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, APPLICATION_JSON, CONTENT_TYPE};
use crate::types::{
    AdditionalService, BusinessHours, BusinessInfo, BusinessStats, ContactReceipt,
    ContactRequest, CoverageAreas, Service, Testimonial,
};

/// Synchronous, stateless client for the notary API.
#[derive(Debug, Clone)]
pub struct NotaryClient {
    base_url: String,
}

impl NotaryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: default_headers(),
            body: None,
        }
    }

    pub fn build_submit_contact(&self, input: &ContactRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/contact/submit", self.base_url),
            headers: default_headers(),
            body: Some(body),
        })
    }

    pub fn build_business_info(&self) -> HttpRequest {
        self.get("/business/info")
    }

    pub fn build_business_hours(&self) -> HttpRequest {
        self.get("/business/hours")
    }

    pub fn build_business_stats(&self) -> HttpRequest {
        self.get("/business/stats")
    }

    pub fn build_services(&self) -> HttpRequest {
        self.get("/services")
    }

    pub fn build_additional_pricing(&self) -> HttpRequest {
        self.get("/pricing/additional")
    }

    pub fn build_coverage(&self) -> HttpRequest {
        self.get("/coverage")
    }

    pub fn build_testimonials(&self, limit: u32) -> HttpRequest {
        self.get(&format!("/testimonials?limit={limit}"))
    }

    /// Request for the service root, used as the availability probe.
    pub fn build_root(&self) -> HttpRequest {
        self.get("/")
    }

    pub fn parse_submit_contact(&self, response: HttpResponse) -> Result<ContactReceipt, ApiError> {
        parse_json(response)
    }

    pub fn parse_business_info(&self, response: HttpResponse) -> Result<BusinessInfo, ApiError> {
        parse_json(response)
    }

    pub fn parse_business_hours(&self, response: HttpResponse) -> Result<BusinessHours, ApiError> {
        parse_json(response)
    }

    pub fn parse_business_stats(&self, response: HttpResponse) -> Result<BusinessStats, ApiError> {
        parse_json(response)
    }

    pub fn parse_services(&self, response: HttpResponse) -> Result<Vec<Service>, ApiError> {
        parse_json(response)
    }

    pub fn parse_additional_pricing(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<AdditionalService>, ApiError> {
        parse_json(response)
    }

    pub fn parse_coverage(&self, response: HttpResponse) -> Result<CoverageAreas, ApiError> {
        parse_json(response)
    }

    pub fn parse_testimonials(&self, response: HttpResponse) -> Result<Vec<Testimonial>, ApiError> {
        parse_json(response)
    }
}

fn default_headers() -> Vec<(String, String)> {
    vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to `ApiError::Http`, keeping the server's detail.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        detail: error_detail(&response.body),
        body: response.body.clone(),
    })
}

/// Extract the `detail` field from an error body.
///
/// A plain string is returned as is. A validation list such as
/// `[{"msg": "..."}, ...]` is flattened into `"; "`-joined messages.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
