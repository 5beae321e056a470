//! In-process mock of the Data.gov.sg API.
//!
//! Each server answers every request with one fixed status and body and
//! records the request URIs it saw. It runs on its own current-thread tokio
//! runtime on a background thread, so the blocking client under test never
//! executes inside a runtime.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{StatusCode, Uri};
use datagovsg::Client;

pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub fn start(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        let body: Vec<u8> = body.into();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let app = Router::new().fallback(move |uri: Uri| {
            let seen = Arc::clone(&seen);
            let body = body.clone();
            async move {
                seen.lock().unwrap().push(uri.to_string());
                (status, body)
            }
        });

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
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            requests,
        }
    }

    /// Serves `tests/fixtures/<name>` with status 200.
    pub fn with_fixture(name: &str) -> Self {
        Self::start(200, fixture(name))
    }

    pub fn client(&self) -> Client {
        let mut client = Client::default();
        client.set_base_url(&self.url);
        client
    }

    /// Request URIs (path and query) received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("error loading fixture {}: {e}", path.display()))
}

pub fn fixture_json(name: &str) -> serde_json::Value {
    serde_json::from_slice(&fixture(name)).unwrap()
}
