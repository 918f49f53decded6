//! The single choke point for calls to the notary backend.
//!
//! # Design
//! `ApiService` pairs a `NotaryClient` (what to send, how to read the answer)
//! with a `Transport` (how to send it). Every call goes through `send`, which
//! runs the interceptor hooks and bounds the round-trip with a fixed timeout.
//! Public operations never return `ApiError`: each folds failures into an
//! `ApiResult` whose message is either the server's `detail` or a short
//! per-operation fallback. Calls are made exactly once; there is no retry.

use std::time::Duration;

use crate::client::NotaryClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::hooks::{Interceptor, LogInterceptor};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    AdditionalService, BusinessHours, BusinessInfo, BusinessStats, ContactReceipt,
    ContactRequest, CoverageAreas, Service, Testimonial,
};

/// Upper bound on every regular API call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on the availability probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_TESTIMONIAL_LIMIT: u32 = 10;

const SUBMIT_CONTACT_FALLBACK: &str = "Failed to submit contact form";
const BUSINESS_INFO_FALLBACK: &str = "Failed to load business information";
const BUSINESS_HOURS_FALLBACK: &str = "Failed to load business hours";
const BUSINESS_STATS_FALLBACK: &str = "Failed to load business statistics";
const SERVICES_FALLBACK: &str = "Failed to load services";
const ADDITIONAL_PRICING_FALLBACK: &str = "Failed to load additional pricing";
const COVERAGE_FALLBACK: &str = "Failed to load coverage areas";
const TESTIMONIALS_FALLBACK: &str = "Failed to load testimonials";

/// Where a failed call broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response: unreachable, refused, timed out.
    Transport,
    /// The server answered with a non-2xx status.
    Rejected,
    /// A payload could not be encoded or decoded.
    Malformed,
}

/// User-facing description of a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub error: String,
    pub kind: FailureKind,
}

impl ApiFailure {
    fn from_error(err: &ApiError, fallback: &str) -> Self {
        let kind = match err {
            ApiError::Transport(_) => FailureKind::Transport,
            ApiError::Http { .. } => FailureKind::Rejected,
            ApiError::Deserialization(_) | ApiError::Serialization(_) => FailureKind::Malformed,
        };
        Self {
            error: err.detail().unwrap_or(fallback).to_string(),
            kind,
        }
    }
}

/// Outcome of every public `ApiService` operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    /// The user-facing message, if this is a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(failure) => Some(&failure.error),
        }
    }

    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiResult::Success(data) => Ok(data),
            ApiResult::Failure(failure) => Err(failure),
        }
    }
}

pub struct ApiService<T = ReqwestTransport> {
    client: NotaryClient,
    transport: T,
    interceptor: Box<dyn Interceptor>,
}

impl ApiService<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            NotaryClient::new(&config.api_base_url()),
            ReqwestTransport::default(),
        )
    }
}

impl<T: Transport> ApiService<T> {
    pub fn new(client: NotaryClient, transport: T) -> Self {
        Self {
            client,
            transport,
            interceptor: Box::new(LogInterceptor),
        }
    }

    /// Replace the default logging hooks.
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptor = Box::new(interceptor);
        self
    }

    pub fn client(&self) -> &NotaryClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: HttpRequest, timeout: Duration) -> Result<HttpResponse, ApiError> {
        self.interceptor.on_request(&request);
        let url = request.url.clone();
        let outcome = match tokio::time::timeout(timeout, self.transport.execute(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(TransportError::Timeout(timeout)),
        };
        self.interceptor.on_response(&url, &outcome);
        outcome.map_err(ApiError::from)
    }

    async fn call<R>(
        &self,
        fallback: &'static str,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&NotaryClient, HttpResponse) -> Result<R, ApiError>,
    ) -> ApiResult<R> {
        let outcome = match request {
            Ok(request) => match self.send(request, REQUEST_TIMEOUT).await {
                Ok(response) => parse(&self.client, response),
                Err(err) => Err(err),
            },
            Err(err) => Err(err),
        };
        match outcome {
            Ok(data) => ApiResult::Success(data),
            Err(err) => {
                tracing::warn!(error = %err, "{fallback}");
                ApiResult::Failure(ApiFailure::from_error(&err, fallback))
            }
        }
    }

    pub async fn submit_contact_form(&self, input: &ContactRequest) -> ApiResult<ContactReceipt> {
        self.call(
            SUBMIT_CONTACT_FALLBACK,
            self.client.build_submit_contact(input),
            NotaryClient::parse_submit_contact,
        )
        .await
    }

    pub async fn get_business_info(&self) -> ApiResult<BusinessInfo> {
        self.call(
            BUSINESS_INFO_FALLBACK,
            Ok(self.client.build_business_info()),
            NotaryClient::parse_business_info,
        )
        .await
    }

    pub async fn get_business_hours(&self) -> ApiResult<BusinessHours> {
        self.call(
            BUSINESS_HOURS_FALLBACK,
            Ok(self.client.build_business_hours()),
            NotaryClient::parse_business_hours,
        )
        .await
    }

    pub async fn get_business_stats(&self) -> ApiResult<BusinessStats> {
        self.call(
            BUSINESS_STATS_FALLBACK,
            Ok(self.client.build_business_stats()),
            NotaryClient::parse_business_stats,
        )
        .await
    }

    pub async fn get_services(&self) -> ApiResult<Vec<Service>> {
        self.call(
            SERVICES_FALLBACK,
            Ok(self.client.build_services()),
            NotaryClient::parse_services,
        )
        .await
    }

    pub async fn get_additional_pricing(&self) -> ApiResult<Vec<AdditionalService>> {
        self.call(
            ADDITIONAL_PRICING_FALLBACK,
            Ok(self.client.build_additional_pricing()),
            NotaryClient::parse_additional_pricing,
        )
        .await
    }

    pub async fn get_coverage_areas(&self) -> ApiResult<CoverageAreas> {
        self.call(
            COVERAGE_FALLBACK,
            Ok(self.client.build_coverage()),
            NotaryClient::parse_coverage,
        )
        .await
    }

    pub async fn get_testimonials(&self, limit: u32) -> ApiResult<Vec<Testimonial>> {
        self.call(
            TESTIMONIALS_FALLBACK,
            Ok(self.client.build_testimonials(limit)),
            NotaryClient::parse_testimonials,
        )
        .await
    }

    /// `true` only when the service root answers exactly 200 within
    /// `PROBE_TIMEOUT`. Never fails.
    pub async fn is_api_available(&self) -> bool {
        match self.send(self.client.build_root(), PROBE_TIMEOUT).await {
            Ok(response) if response.status == 200 => true,
            Ok(response) => {
                tracing::warn!(status = response.status, "backend API answered the probe with a non-200 status");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "backend API is not available, using fallback content");
                false
            }
        }
    }
}
