//! Request/response hooks run around every call `ApiService` makes.

use crate::client::error_detail;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Observes traffic without altering it.
pub trait Interceptor: Send + Sync {
    fn on_request(&self, _request: &HttpRequest) {}

    fn on_response(&self, _url: &str, _outcome: &Result<HttpResponse, TransportError>) {}
}

/// Default hooks: one `tracing` event per request and per response.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogInterceptor;

impl Interceptor for LogInterceptor {
    fn on_request(&self, request: &HttpRequest) {
        tracing::info!(method = request.method.as_str(), url = %request.url, "api request");
    }

    fn on_response(&self, url: &str, outcome: &Result<HttpResponse, TransportError>) {
        match outcome {
            Ok(response) if response.is_success() => {
                tracing::info!(status = response.status, url, "api response");
            }
            Ok(response) => {
                let detail = error_detail(&response.body);
                tracing::warn!(
                    status = response.status,
                    url,
                    detail = detail.as_deref().unwrap_or(response.body.as_str()),
                    "api error response"
                );
            }
            Err(err) => {
                tracing::error!(url, error = %err, "api transport error");
            }
        }
    }
}
