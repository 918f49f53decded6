//! Informational content shown by the landing page sections.
//!
//! Every section has a static copy that is rendered when the backend is
//! unreachable. `SiteContent::load` probes the backend once and, if it is up,
//! replaces each section with live data independently: a section whose fetch
//! fails keeps its static copy.

use uuid::Uuid;

use crate::service::{ApiService, DEFAULT_TESTIMONIAL_LIMIT};
use crate::transport::Transport;
use crate::types::{
    AdditionalService, BusinessInfo, BusinessStats, CoverageAreas, Service, Testimonial, TravelFee,
};

/// Where a section's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Section<T> {
    fn fallback(data: T) -> Self {
        Self {
            data,
            source: Source::Fallback,
        }
    }

    fn refresh(&mut self, live: Option<T>) {
        if let Some(data) = live {
            self.data = data;
            self.source = Source::Live;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub business: Section<BusinessInfo>,
    pub stats: Section<BusinessStats>,
    pub services: Section<Vec<Service>>,
    pub additional_pricing: Section<Vec<AdditionalService>>,
    pub coverage: Section<CoverageAreas>,
    pub testimonials: Section<Vec<Testimonial>>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::fallback()
    }
}

impl SiteContent {
    /// The static copy of every section.
    pub fn fallback() -> Self {
        Self {
            business: Section::fallback(fallback_business()),
            stats: Section::fallback(fallback_stats()),
            services: Section::fallback(fallback_services()),
            additional_pricing: Section::fallback(fallback_additional_pricing()),
            coverage: Section::fallback(fallback_coverage()),
            testimonials: Section::fallback(fallback_testimonials()),
        }
    }

    pub async fn load<T: Transport>(api: &ApiService<T>) -> Self {
        let mut content = Self::fallback();
        if !api.is_api_available().await {
            return content;
        }

        let (business, stats, services, pricing, coverage, testimonials) = tokio::join!(
            api.get_business_info(),
            api.get_business_stats(),
            api.get_services(),
            api.get_additional_pricing(),
            api.get_coverage_areas(),
            api.get_testimonials(DEFAULT_TESTIMONIAL_LIMIT),
        );
        content.business.refresh(business.ok());
        content.stats.refresh(stats.ok());
        content.services.refresh(services.ok());
        content.additional_pricing.refresh(pricing.ok());
        content.coverage.refresh(coverage.ok());
        content.testimonials.refresh(testimonials.ok());
        content
    }

    pub fn is_fully_live(&self) -> bool {
        [
            self.business.source,
            self.stats.source,
            self.services.source,
            self.additional_pricing.source,
            self.coverage.source,
            self.testimonials.source,
        ]
        .iter()
        .all(|source| *source == Source::Live)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn fallback_business() -> BusinessInfo {
    BusinessInfo {
        business_name: "i-Notarize-Online".to_string(),
        notary_name: "Yordanos Mathewos".to_string(),
        license: "NY-2024-001234".to_string(),
        phone: "(555) 123-4567".to_string(),
        email: "yordanos@i-notarize-online.com".to_string(),
        service_area: "Greater New York Area & Worldwide".to_string(),
    }
}

fn fallback_stats() -> BusinessStats {
    BusinessStats {
        documents_notarized: "500+".to_string(),
        average_rating: "4.9".to_string(),
        average_session_time: "15min".to_string(),
        service_availability: "24/7".to_string(),
    }
}

fn fallback_services() -> Vec<Service> {
    vec![
        Service {
            id: "remote".to_string(),
            name: "Remote Online Notarization".to_string(),
            base_price: Some(25.0),
            description: "Secure video-based notarization from anywhere".to_string(),
            features: strings(&["Instant delivery", "Legally binding", "Secure platform"]),
            availability: "24/7".to_string(),
        },
        Service {
            id: "mobile".to_string(),
            name: "Mobile Notary Service".to_string(),
            base_price: Some(75.0),
            description: "Professional notary comes to your location".to_string(),
            features: strings(&["NYC metro area", "Same-day service", "Volume discounts"]),
            availability: "8 AM - 8 PM".to_string(),
        },
        Service {
            id: "bulk".to_string(),
            name: "Bulk Services".to_string(),
            base_price: None,
            description: "Custom pricing for businesses and law firms".to_string(),
            features: strings(&["Volume pricing", "Priority scheduling", "Dedicated support"]),
            availability: "By appointment".to_string(),
        },
    ]
}

fn fallback_additional_pricing() -> Vec<AdditionalService> {
    [
        ("Document scan & prep", 10.0, None),
        ("Rush processing (< 2 hours)", 15.0, None),
        ("Certified copies", 5.0, Some("each")),
        ("Apostille coordination", 25.0, None),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (service, price, unit))| AdditionalService {
        id: Uuid::from_u128(i as u128 + 1),
        service: service.to_string(),
        price,
        unit: unit.map(str::to_string),
    })
    .collect()
}

fn fallback_coverage() -> CoverageAreas {
    CoverageAreas {
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
            TravelFee {
                area: "Manhattan & Brooklyn".to_string(),
                fee: "$0".to_string(),
                description: "No travel fee within 10 miles".to_string(),
            },
            TravelFee {
                area: "Queens, Bronx, Staten Island".to_string(),
                fee: "$25".to_string(),
                description: "Flat rate within boroughs".to_string(),
            },
            TravelFee {
                area: "Long Island, Westchester".to_string(),
                fee: "$1/mile".to_string(),
                description: "Per mile beyond 25 mile radius".to_string(),
            },
        ],
    }
}

fn fallback_testimonials() -> Vec<Testimonial> {
    [
        (
            "Sarah Johnson",
            "Real Estate Agent",
            "Yordanos made our urgent closing possible with her remote service. Professional, quick, and legally compliant. Highly recommended!",
            "2024-01-15",
        ),
        (
            "Michael Chen",
            "Business Owner",
            "Needed multiple documents notarized for my business. The mobile service was convenient and saved me hours of travel time.",
            "2024-01-10",
        ),
        (
            "Lisa Rodriguez",
            "Healthcare Professional",
            "Perfect for my busy schedule. The remote notarization was seamless and the documents were ready immediately.",
            "2024-01-08",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, role, content, date))| Testimonial {
        id: Uuid::from_u128(i as u128 + 1),
        name: name.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        rating: 5,
        date: date.to_string(),
    })
    .collect()
}
