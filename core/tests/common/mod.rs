//! Shared helpers for the core integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use notary_core::{
    ApiService, HttpRequest, HttpResponse, NotaryClient, Transport, TransportError,
};

pub const BASE_URL: &str = "http://backend.test/api";

/// Transport that answers from a script and remembers what it was asked.
pub struct ScriptedTransport {
    reply: Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync>,
    delay: Option<Duration>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(
        reply: impl Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            reply: Box::new(reply),
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with `status` and `body`.
    pub fn respond(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| Ok(response(status, &body)))
    }

    /// Fail every request before any response arrives.
    pub fn fail(err: TransportError) -> Self {
        Self::new(move |_| Err(err.clone()))
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.reply)(&request)
    }
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: Vec::new(),
        body: body.to_string(),
    }
}

pub fn api(transport: ScriptedTransport) -> ApiService<ScriptedTransport> {
    ApiService::new(NotaryClient::new(BASE_URL), transport)
}

/// Start the mock backend on an ephemeral port and return its API base URL.
pub fn spawn_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}
