//! End-to-end tests against a live server on an ephemeral port.

use std::sync::Arc;

use serde_json::Value;
use signup_api::{ApiServer, AppState};
use signup_config::ServerConfig;
use signup_core::ActivityRegistry;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    registry: Arc<ActivityRegistry>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<bool>,
}

impl TestServer {
    async fn start() -> Self {
        let registry = Arc::new(ActivityRegistry::seeded());
        let state = Arc::new(AppState::new(registry.clone()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let server = ApiServer::new(ServerConfig::default(), state);
            server
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await
                .is_ok()
        });

        Self {
            base_url: format!("http://{}", addr),
            registry,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        assert!(self.handle.await.unwrap());
    }
}

#[tokio::test]
async fn test_signup_flow_over_http() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let signup = server.url("/activities/Basketball%20Team/signup");
    let resp = client
        .post(&signup)
        .query(&[("email", "testuser@example.com")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(&signup)
        .query(&[("email", "testuser@example.com")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Student is already signed up");

    assert!(server
        .registry
        .is_registered("Basketball Team", "testuser@example.com"));

    let resp = client
        .delete(server.url("/activities/Basketball%20Team/participants"))
        .query(&[("email", "testuser@example.com")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let list: Value = client
        .get(server.url("/activities"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let participants = list["Basketball Team"]["participants"].as_array().unwrap();
    assert!(!participants.iter().any(|p| p == "testuser@example.com"));

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_activity_over_http() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/activities/NoSuchActivity/signup"))
        .query(&[("email", "a@b.com")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(server.url("/activities/NoSuchActivity/participants"))
        .query(&[("email", "a@b.com")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_signups_over_http() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let requests = (0..20).map(|i| {
        let client = client.clone();
        let url = server.url("/activities/Debate%20Team/signup");
        async move {
            client
                .post(url)
                .query(&[("email", format!("student{i}@example.com"))])
                .send()
                .await
                .unwrap()
                .status()
        }
    });
    let statuses = futures::future::join_all(requests).await;
    assert!(statuses.iter().all(|s| *s == 200));

    let debate = server.registry.get("Debate Team").unwrap();
    assert_eq!(debate.participants.len(), 20);

    server.stop().await;
}
