use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const API_VERSION: &str = "1.0.0";
pub const PENDING_REQUEST_DETAIL: &str = "Email already has a pending request";

const SERVICE_TYPES: [&str; 3] = ["remote", "mobile", "bulk"];
const URGENCIES: [&str; 2] = ["normal", "urgent"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactSubmissionCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_urgency")]
    pub urgency: String,
}

fn default_urgency() -> String {
    "normal".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    #[serde(flatten)]
    pub request: ContactSubmissionCreate,
    pub status: String,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactSubmissionResponse {
    pub success: bool,
    pub message: String,
    pub reference: String,
    pub estimated_response: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub base_price: Option<f64>,
    pub description: String,
    pub features: Vec<String>,
    pub availability: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdditionalService {
    pub id: Uuid,
    pub service: String,
    pub price: f64,
    pub unit: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TravelFee {
    pub area: String,
    pub fee: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverageArea {
    pub mobile_areas: Vec<String>,
    pub remote_areas: Vec<String>,
    pub travel_fees: Vec<TravelFee>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub business_name: String,
    pub notary_name: String,
    pub license: String,
    pub phone: String,
    pub email: String,
    pub service_area: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusinessStats {
    pub documents_notarized: String,
    pub average_rating: String,
    pub average_session_time: String,
    pub service_availability: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub date: String,
    pub verified: bool,
    pub active: bool,
}

/// Read-only business data served by the informational endpoints.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub info: BusinessInfo,
    pub hours: BTreeMap<String, String>,
    pub stats: BusinessStats,
    pub services: Vec<Service>,
    pub additional: Vec<AdditionalService>,
    pub coverage: CoverageArea,
    pub testimonials: Vec<Testimonial>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Catalog {
    pub fn seeded() -> Self {
        let service = |id: &str, name: &str, base_price, description: &str, features: &[&str], availability: &str| Service {
            id: id.to_string(),
            name: name.to_string(),
            base_price,
            description: description.to_string(),
            features: strings(features),
            availability: availability.to_string(),
            active: true,
        };
        let additional = |service: &str, price, unit: Option<&str>| AdditionalService {
            id: Uuid::new_v4(),
            service: service.to_string(),
            price,
            unit: unit.map(str::to_string),
            active: true,
        };
        let testimonial = |name: &str, role: &str, content: &str, date: &str| Testimonial {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role: role.to_string(),
            content: content.to_string(),
            rating: 5,
            date: date.to_string(),
            verified: true,
            active: true,
        };
        let fee = |area: &str, fee: &str, description: &str| TravelFee {
            area: area.to_string(),
            fee: fee.to_string(),
            description: description.to_string(),
        };

        Self {
            info: BusinessInfo {
                business_name: "i-Notarize-Online".to_string(),
                notary_name: "Yordanos Mathewos".to_string(),
                license: "NY-2024-001234".to_string(),
                phone: "(555) 123-4567".to_string(),
                email: "yordanos@i-notarize-online.com".to_string(),
                service_area: "Greater New York Area & Worldwide".to_string(),
            },
            hours: [
                ("remote", "24/7"),
                ("mobile", "8 AM - 8 PM"),
                ("phone_support", "7 AM - 10 PM"),
                ("weekend", "Available"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            stats: BusinessStats {
                documents_notarized: "500+".to_string(),
                average_rating: "4.9".to_string(),
                average_session_time: "15min".to_string(),
                service_availability: "24/7".to_string(),
            },
            services: vec![
                service(
                    "remote",
                    "Remote Online Notarization",
                    Some(25.0),
                    "Secure video-based notarization from anywhere in the world. Perfect for busy professionals and urgent documents.",
                    &["24/7 Availability", "Legally Binding", "Instant Delivery"],
                    "24/7",
                ),
                service(
                    "mobile",
                    "Mobile Notary Service",
                    Some(75.0),
                    "I come to you anywhere in the greater New York area. Perfect for real estate closings and bulk documents.",
                    &["Same-Day Service", "NYC Metro Area", "Volume Discounts"],
                    "8 AM - 8 PM",
                ),
                service(
                    "bulk",
                    "Bulk Services",
                    None,
                    "Custom pricing for businesses and law firms with volume notarization needs.",
                    &["Volume Pricing", "Priority Scheduling", "Dedicated Support"],
                    "By Appointment",
                ),
            ],
            additional: vec![
                additional("Document scan & prep", 10.0, None),
                additional("Rush processing (< 2 hours)", 15.0, None),
                additional("Certified copies", 5.0, Some("each")),
                additional("Apostille coordination", 25.0, None),
            ],
            coverage: CoverageArea {
                mobile_areas: strings(&[
                    "Manhattan",
                    "Brooklyn",
                    "Queens",
                    "Bronx",
                    "Staten Island",
                    "Long Island",
                    "Westchester",
                    "Nassau County",
                    "Suffolk County",
                ]),
                remote_areas: strings(&[
                    "All 50 US States",
                    "Washington DC",
                    "Puerto Rico",
                    "International (US Citizens)",
                    "Military (APO/FPO)",
                ]),
                travel_fees: vec![
                    fee("Manhattan & Brooklyn", "$0", "No travel fee within 10 miles"),
                    fee("Queens, Bronx, Staten Island", "$25", "Flat rate within boroughs"),
                    fee("Long Island, Westchester", "$1/mile", "Per mile beyond 25 mile radius"),
                ],
            },
            testimonials: vec![
                testimonial(
                    "Sarah Johnson",
                    "Real Estate Agent",
                    "Yordanos made our urgent closing possible with her remote service. Professional, quick, and legally compliant. Highly recommended!",
                    "2024-01-15",
                ),
                testimonial(
                    "Michael Chen",
                    "Business Owner",
                    "Needed multiple documents notarized for my business. The mobile service was convenient and saved me hours of travel time.",
                    "2024-01-10",
                ),
                testimonial(
                    "Lisa Rodriguez",
                    "Healthcare Professional",
                    "Perfect for my busy schedule. The remote notarization was seamless and the documents were ready immediately.",
                    "2024-01-08",
                ),
            ],
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub submissions: RwLock<Vec<ContactSubmission>>,
}

pub type Db = Arc<AppState>;

pub fn app() -> Router {
    app_with(Catalog::seeded())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(AppState {
        catalog,
        submissions: RwLock::new(Vec::new()),
    });
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/contact/submit", post(submit_contact))
        .route("/api/contact/submissions", get(list_submissions))
        .route("/api/business/info", get(business_info))
        .route("/api/business/hours", get(business_hours))
        .route("/api/business/stats", get(business_stats))
        .route("/api/services", get(services))
        .route("/api/pricing/additional", get(additional_pricing))
        .route("/api/coverage", get(coverage))
        .route("/api/testimonials", get(testimonials))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type ApiError = (StatusCode, Json<ErrorDetail>);

fn reject(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorDetail { detail: detail.into() }))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "i-Notarize-Online API is running",
        "version": API_VERSION,
    }))
}

/// Field rules the backend enforces on a submission.
pub fn validate(input: &ContactSubmissionCreate) -> Result<(), String> {
    let name_len = input.name.chars().count();
    if !(2..=100).contains(&name_len) {
        return Err("name must be between 2 and 100 characters".to_string());
    }
    match input.email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.ends_with('.') => {}
        _ => return Err("email is not a valid email address".to_string()),
    }
    let phone_len = input.phone.chars().count();
    if !(10..=20).contains(&phone_len) {
        return Err("phone must be between 10 and 20 characters".to_string());
    }
    if !SERVICE_TYPES.contains(&input.service_type.as_str()) {
        return Err(format!("service_type must be one of {}", SERVICE_TYPES.join(", ")));
    }
    if input.document_type.as_deref().is_some_and(|doc| doc.chars().count() > 100) {
        return Err("document_type must be at most 100 characters".to_string());
    }
    if input.message.as_deref().is_some_and(|msg| msg.chars().count() > 1000) {
        return Err("message must be at most 1000 characters".to_string());
    }
    if !URGENCIES.contains(&input.urgency.as_str()) {
        return Err(format!("urgency must be one of {}", URGENCIES.join(", ")));
    }
    Ok(())
}

/// `REQ-<unix seconds>-<8 hex>`; the suffix keeps same-second submissions apart.
pub fn reference_for(id: Uuid, at: DateTime<Utc>) -> String {
    let suffix = id.simple().to_string();
    format!("REQ-{}-{}", at.timestamp(), &suffix[..8])
}

async fn submit_contact(
    State(db): State<Db>,
    payload: Result<Json<ContactSubmissionCreate>, JsonRejection>,
) -> Result<Json<ContactSubmissionResponse>, ApiError> {
    let Json(input) = payload.map_err(|rejection| reject(rejection.status(), rejection.body_text()))?;
    validate(&input).map_err(|detail| reject(StatusCode::UNPROCESSABLE_ENTITY, detail))?;

    let mut submissions = db.submissions.write().await;
    let pending = submissions
        .iter()
        .any(|s| s.status == "new" && s.request.email.eq_ignore_ascii_case(&input.email));
    if pending {
        tracing::info!(email = %input.email, "rejecting duplicate pending request");
        return Err(reject(StatusCode::CONFLICT, PENDING_REQUEST_DETAIL));
    }

    let now = Utc::now();
    let estimated_response = if input.urgency == "urgent" {
        "within 1 hour"
    } else {
        "within 2 hours"
    };
    let id = Uuid::new_v4();
    let submission = ContactSubmission {
        id,
        request: input,
        status: "new".to_string(),
        reference: reference_for(id, now),
        created_at: now,
    };
    tracing::info!(reference = %submission.reference, "contact submission stored");
    let response = ContactSubmissionResponse {
        success: true,
        message: "Thank you for your request! We will contact you soon to confirm your appointment."
            .to_string(),
        reference: submission.reference.clone(),
        estimated_response: estimated_response.to_string(),
    };
    submissions.push(submission);
    Ok(Json(response))
}

async fn list_submissions(State(db): State<Db>) -> Json<Vec<ContactSubmission>> {
    let submissions = db.submissions.read().await;
    Json(submissions.iter().rev().take(100).cloned().collect())
}

async fn business_info(State(db): State<Db>) -> Json<BusinessInfo> {
    Json(db.catalog.info.clone())
}

async fn business_hours(State(db): State<Db>) -> Json<BTreeMap<String, String>> {
    Json(db.catalog.hours.clone())
}

async fn business_stats(State(db): State<Db>) -> Json<BusinessStats> {
    Json(db.catalog.stats.clone())
}

async fn services(State(db): State<Db>) -> Json<Vec<Service>> {
    Json(db.catalog.services.iter().filter(|s| s.active).cloned().collect())
}

async fn additional_pricing(State(db): State<Db>) -> Json<Vec<AdditionalService>> {
    Json(db.catalog.additional.iter().filter(|s| s.active).cloned().collect())
}

async fn coverage(State(db): State<Db>) -> Json<CoverageArea> {
    Json(db.catalog.coverage.clone())
}

#[derive(Deserialize)]
pub struct TestimonialQuery {
    pub limit: Option<usize>,
}

async fn testimonials(
    State(db): State<Db>,
    Query(query): Query<TestimonialQuery>,
) -> Json<Vec<Testimonial>> {
    let limit = query.limit.unwrap_or(10);
    Json(
        db.catalog
            .testimonials
            .iter()
            .filter(|t| t.active && t.verified)
            .take(limit)
            .cloned()
            .collect(),
    )
}
