#![allow(dead_code)]

use service_core::config::Config as CoreConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tasky_service::config::{MongoConfig, TaskyConfig, WizFileConfig};
use tasky_service::services::{InMemoryTodoStore, TodoDb};
use tasky_service::startup::Application;
use uuid::Uuid;

pub const WIZ_CONTENTS: &str = "wiz exercise\nline two with ünïcødé\n";

pub fn test_config() -> TaskyConfig {
    TaskyConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        mongodb: MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("tasky_test_{}", Uuid::new_v4()),
        },
        wiz_file: WizFileConfig {
            path: PathBuf::from(format!("target/test-wiz-{}.txt", Uuid::new_v4())),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub wiz_path: PathBuf,
    pub store: Arc<InMemoryTodoStore>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn against an in-memory store with the wiz file written.
    pub async fn spawn() -> Self {
        let app = Self::spawn_without_wiz_file().await;
        tokio::fs::create_dir_all("target")
            .await
            .expect("Failed to create target dir");
        tokio::fs::write(&app.wiz_path, WIZ_CONTENTS)
            .await
            .expect("Failed to write wiz file");
        app
    }

    /// Spawn against an in-memory store; the wiz file does not exist.
    pub async fn spawn_without_wiz_file() -> Self {
        let config = test_config();
        let wiz_path = config.wiz_file.path.clone();
        let store = Arc::new(InMemoryTodoStore::new());

        let app = Application::build_with_store(config, store.clone())
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        wait_until_ready(&client, port).await;

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
            wiz_path,
            store,
            client,
        }
    }

    pub async fn post_todo(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/todos", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_todos(&self) -> Vec<serde_json::Value> {
        let response = self
            .client
            .get(format!("{}/todos", self.address))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_file(&self.wiz_path).await;
    }
}

/// A TestApp backed by a real MongoDB database.
pub struct MongoTestApp {
    pub address: String,
    pub db: TodoDb,
    pub db_name: String,
    pub client: reqwest::Client,
}

impl MongoTestApp {
    pub async fn spawn() -> Self {
        let config = test_config();
        let db_name = config.mongodb.database.clone();
        let db = TodoDb::connect(&config.mongodb.uri, &db_name)
            .await
            .expect("Failed to connect to MongoDB");

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        wait_until_ready(&client, port).await;

        MongoTestApp {
            address: format!("http://127.0.0.1:{}", port),
            db,
            db_name,
            client,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

async fn wait_until_ready(client: &reqwest::Client, port: u16) {
    // Wait for HTTP server to be ready by polling health endpoint
    let health_url = format!("http://127.0.0.1:{}/health", port);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }
}
