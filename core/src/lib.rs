//! Client core for the notary-services landing page.
//!
//! # Overview
//! Two pieces make up the page's behaviour:
//! - the API client (`NotaryClient` + `ApiService`), the one place outbound
//!   calls are built, sent, logged and normalised into `ApiResult`;
//! - the contact submission flow (`ContactForm`), which turns what the user
//!   typed into a `ContactRequest`, sends it, and keeps the tri-state status
//!   the page shows.
//!
//! `LandingPage` ties them to a page's lifetime: it owns the form, loads the
//! business hours once on mount, and falls back to static content when the
//! backend cannot be reached.
//!
//! # Design
//! - `NotaryClient` is stateless and I/O free: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `ApiService` owns the `Transport`, the fixed timeouts and the
//!   request/response hooks. Callers only ever see `ApiResult`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod hooks;
pub mod http;
pub mod page;
pub mod service;
pub mod transport;
pub mod types;

pub use client::NotaryClient;
pub use config::ClientConfig;
pub use content::{SiteContent, Source};
pub use error::{ApiError, ConfigError, SubmitError, TransportError, ValidationError};
pub use form::{ContactDraft, ContactForm, Field, Phase, SubmissionResult, SUBMIT_FAILED_MESSAGE};
pub use hooks::{Interceptor, LogInterceptor};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::LandingPage;
pub use service::{ApiFailure, ApiResult, ApiService, FailureKind, PROBE_TIMEOUT, REQUEST_TIMEOUT};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    AdditionalService, BusinessHours, BusinessInfo, BusinessStats, ContactReceipt,
    ContactRequest, CoverageAreas, DocumentType, Service, ServiceType, Testimonial, TravelFee,
    Urgency,
};
