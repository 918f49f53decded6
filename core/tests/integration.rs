//! Full client round-trips against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `ApiService`,
//! `ContactForm` and `LandingPage` over real HTTP through `ReqwestTransport`.
//! Validates that the core's DTOs match what the server actually sends.

mod common;

use common::spawn_mock_server;
use notary_core::{
    ApiService, ContactForm, Field, LandingPage, NotaryClient, ReqwestTransport, ServiceType,
    SubmissionResult, Source, SUBMIT_FAILED_MESSAGE,
};

fn live_api(base_url: &str) -> ApiService {
    ApiService::new(NotaryClient::new(base_url), ReqwestTransport::default())
}

fn filled_form(email: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.edit(Field::Name, "Jane Doe");
    form.edit(Field::Email, email);
    form.edit(Field::Phone, "(555) 010-0100");
    form.edit(Field::ServiceType, "mobile");
    form.edit(Field::DocumentType, "real-estate");
    form.edit(Field::PreferredDate, "2025-06-01");
    form
}

#[tokio::test]
async fn read_endpoints_decode_into_core_types() {
    let api = live_api(&spawn_mock_server());

    assert!(api.is_api_available().await);

    let info = api.get_business_info().await.ok().unwrap();
    assert_eq!(info.business_name, "i-Notarize-Online");

    let hours = api.get_business_hours().await.ok().unwrap();
    assert_eq!(hours.get("remote"), Some("24/7"));

    let stats = api.get_business_stats().await.ok().unwrap();
    assert_eq!(stats.average_rating, "4.9");

    let services = api.get_services().await.ok().unwrap();
    let ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec![ServiceType::Remote.as_str(), "mobile", "bulk"]);

    let pricing = api.get_additional_pricing().await.ok().unwrap();
    assert_eq!(pricing.len(), 4);

    let coverage = api.get_coverage_areas().await.ok().unwrap();
    assert!(coverage.mobile_areas.contains(&"Brooklyn".to_string()));

    let testimonials = api.get_testimonials(2).await.ok().unwrap();
    assert_eq!(testimonials.len(), 2);
}

#[tokio::test]
async fn form_submission_lifecycle() {
    let api = live_api(&spawn_mock_server());

    // Step 1: first request is accepted and the form resets.
    let mut form = filled_form("jane@example.com");
    let result = form.submit(&api).await.unwrap().clone();
    match result {
        SubmissionResult::Success { reference, .. } => assert!(reference.starts_with("REQ-")),
        other => panic!("expected success, got {other:?}"),
    }
    assert!(form.draft().is_empty());

    // Step 2: a second request for the same email is refused with the server's detail.
    let mut form = filled_form("jane@example.com");
    form.submit(&api).await.unwrap();
    assert_eq!(
        form.status(),
        Some(&SubmissionResult::Failure {
            error: mock_server::PENDING_REQUEST_DETAIL.to_string()
        })
    );
    assert_eq!(form.draft().email, "jane@example.com");

    // Step 3: fixing the field clears the status; a new email goes through.
    form.edit(Field::Email, "jane.alt@example.com");
    assert!(form.status().is_none());
    assert!(form.submit(&api).await.unwrap().is_success());
}

#[tokio::test]
async fn server_side_validation_detail_reaches_the_form() {
    let api = live_api(&spawn_mock_server());
    let mut form = filled_form("short@example.com");
    form.edit(Field::Phone, "555-0100");

    form.submit(&api).await.unwrap();

    assert_eq!(
        form.status(),
        Some(&SubmissionResult::Failure {
            error: "phone must be between 10 and 20 characters".to_string()
        })
    );
}

#[tokio::test]
async fn unreachable_backend_falls_back_everywhere() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = live_api(&format!("http://127.0.0.1:{port}/api"));

    assert!(!api.is_api_available().await);

    let mut page = LandingPage::new();
    page.mount(&api).await;
    assert!(page.business_hours().is_none());
    assert_eq!(page.content().services.source, Source::Fallback);

    let mut form = filled_form("jane@example.com");
    form.submit(&api).await.unwrap();
    assert_eq!(
        form.status(),
        Some(&SubmissionResult::Failure {
            error: SUBMIT_FAILED_MESSAGE.to_string()
        })
    );
}

#[tokio::test]
async fn mount_against_live_backend_uses_live_content() {
    let api = live_api(&spawn_mock_server());
    let mut page = LandingPage::new();

    page.mount(&api).await;

    assert_eq!(page.business_hours().unwrap().get("weekend"), Some("Available"));
    assert!(page.content().is_fully_live());
    assert_eq!(page.content().testimonials.data.len(), 3);
}
