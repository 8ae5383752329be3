#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use blog_api::config::AppConfig;
use blog_api::database::{DatabaseManager, MemoryStore, PgStore};
use blog_api::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

// ---- In-process router over the memory store ----

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub fn test_app() -> TestApp {
    let mut config = AppConfig::for_tests();
    config.security.jwt_secret = TEST_SECRET.to_string();

    let state = AppState::new(Arc::new(MemoryStore::new()), &config).expect("test state");
    TestApp {
        router: app(state.clone(), &config),
        state,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|e| panic!("invalid JSON {:?}: {}", self.body, e))
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    /// Register `username` and return a fresh session token for it.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let creds = serde_json::json!({ "username": username, "password": password });
        let res = self.post("/api/register", None, creds.clone()).await;
        assert_eq!(res.status, StatusCode::CREATED, "register failed: {}", res.body);

        let res = self.post("/api/login", None, creds).await;
        assert_eq!(res.status, StatusCode::OK, "login failed: {}", res.body);
        res.json()["token"].as_str().expect("token field").to_string()
    }
}

// ---- Spawned server binary ----

/// A running `blog-api` process. The child is killed when this is dropped.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_blog-api"));
        cmd.env("BLOG_API_PORT", port.to_string())
            .env("BLOG_STORAGE", "memory")
            .env("APP_ENV", "development")
            .env("JWT_SECRET", TEST_SECRET)
            .env("BCRYPT_COST", "4")
            .env_remove("DATABASE_URL")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Spawn a fresh server on its own port and wait until `/health` answers.
pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

// ---- PostgreSQL store ----

/// Store connected to `DATABASE_URL`, or `None` when no database is configured.
pub async fn pg_store() -> Option<PgStore> {
    let url = std::env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty())?;

    let mut config = AppConfig::for_tests().database;
    config.url = Some(url);
    config.max_connections = 2;

    let pool = DatabaseManager::connect(&config)
        .await
        .expect("failed to connect to DATABASE_URL");
    Some(PgStore::new(pool))
}

/// Username that will not collide with earlier runs against the same database.
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}
