#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use linktrack::application::services::{AuthService, TrackingService, UrlService};
use linktrack::infrastructure::ip_lookup::{IpLookup, IpLookupError, IpLookupResult};
use linktrack::infrastructure::persistence::{InMemoryClickRepository, InMemoryUrlRepository};
use linktrack::routes::build_router;
use linktrack::state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower::Layer;

pub const BASE_URL: &str = "http://localhost:3000";
pub const ADMIN_PASSWORD: &str = "admin-secret";
pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Answers every lookup with a fixed address.
pub struct StaticIpLookup(pub String);

#[async_trait]
impl IpLookup for StaticIpLookup {
    async fn public_ip(&self) -> IpLookupResult<String> {
        Ok(self.0.clone())
    }
}

/// Fails every lookup.
pub struct FailingIpLookup;

#[async_trait]
impl IpLookup for FailingIpLookup {
    async fn public_ip(&self) -> IpLookupResult<String> {
        Err(IpLookupError::InvalidResponse("upstream down".to_string()))
    }
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// A running test server plus direct handles on its stores.
pub struct TestApp {
    pub server: TestServer,
    pub urls: Arc<InMemoryUrlRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn create_test_state(
    ip_lookup: Arc<dyn IpLookup>,
    behind_proxy: bool,
) -> (
    AppState,
    Arc<InMemoryUrlRepository>,
    Arc<InMemoryClickRepository>,
) {
    let urls = Arc::new(InMemoryUrlRepository::new());
    let clicks = Arc::new(InMemoryClickRepository::new());

    let url_service = Arc::new(UrlService::new(urls.clone(), BASE_URL));
    let tracking_service = Arc::new(TrackingService::new(urls.clone(), clicks.clone()));
    let auth_service = Arc::new(AuthService::new(ADMIN_PASSWORD));

    let state = AppState::new(
        url_service,
        tracking_service,
        auth_service,
        ip_lookup,
        behind_proxy,
    );

    (state, urls, clicks)
}

pub fn create_test_app_with(ip_lookup: Arc<dyn IpLookup>, behind_proxy: bool) -> TestApp {
    let (state, urls, clicks) = create_test_state(ip_lookup, behind_proxy);
    let app = build_router(state, static_dir()).layer(MockConnectInfoLayer);

    TestApp {
        server: TestServer::new(app).unwrap(),
        urls,
        clicks,
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(Arc::new(StaticIpLookup("198.51.100.4".to_string())), false)
}

/// Extracts the short code from a `shortUrl` value.
pub fn code_of(short_url: &str) -> String {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
        .to_string()
}

/// Shortens `url` through the public endpoint and returns its code.
pub async fn shorten(app: &TestApp, url: &str) -> String {
    let response = app
        .server
        .post("/shorten")
        .json(&serde_json::json!({ "originalUrl": url }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    code_of(body["shortUrl"].as_str().unwrap())
}
