#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use contactform::config::{Config, StoreBackend};
use contactform::db::{StoreError, SubmissionStore};
use contactform::models::SubmissionRecord;

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a raw body to the contact route, return (status, body text).
    pub async fn submit_raw(&self, body: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        (status, text)
    }

    /// POST a JSON value to the contact route, return (status, parsed body).
    pub async fn submit_json(&self, data: &Value) -> (StatusCode, Value) {
        let (status, text) = self.submit_raw(&data.to_string()).await;
        let body: Value = serde_json::from_str(&text).unwrap_or(json!(null));
        (status, body)
    }

    /// POST a serialized event to the invoke route, return (HTTP status, response JSON).
    pub async fn invoke(&self, event: &Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url("/invoke"))
            .json(event)
            .send()
            .await
            .expect("invoke request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (status, body)
    }
}

pub fn test_config() -> Config {
    Config {
        store: StoreBackend::Memory,
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_body_size: 1_048_576,
        store_label: "DynamoDB".to_string(),
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app backed by the given store.
pub async fn spawn_app(store: Arc<dyn SubmissionStore>) -> TestApp {
    spawn_app_with_config(store, test_config()).await
}

pub async fn spawn_app_with_config(store: Arc<dyn SubmissionStore>, config: Config) -> TestApp {
    let app = contactform::build_app(store, config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// Store double that rejects every write with a fixed message.
pub struct FailingStore {
    message: String,
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn put(&self, _record: &SubmissionRecord) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Backend(self.message.clone()))
    }
}

/// A throwaway PostgreSQL database with migrations applied.
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
}

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

pub async fn create_test_db() -> TestDb {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let db_name = format!(
        "contactform_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    TestDb { pool, db_name }
}

/// Drop the test database after tests complete.
pub async fn cleanup(db: TestDb) {
    db.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!(
        "DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)",
        db.db_name
    ))
    .execute(&admin_pool)
    .await;

    admin_pool.close().await;
}
