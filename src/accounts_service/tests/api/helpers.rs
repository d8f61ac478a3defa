use std::time::Duration;

use accounts_adapters::HashMapAccountStore;
use accounts_service::AccountsService;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = AccountsService::new(HashMapAccountStore::new())
            .with_timeouts(Duration::from_secs(20), Duration::from_secs(20));

        tokio::spawn(service.run(listener, 1 << 20, std::future::pending()));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.address)
    }

    pub fn user_url(&self, id: &str) -> String {
        format!("{}/api/users/{}", self.address, id)
    }

    pub async fn post_raw(&self, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(self.users_url())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_user(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(self.users_url())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Creates `email` with password `qwerty` and returns its id.
    pub async fn create_user(&self, email: &str) -> String {
        let response = self
            .post_user(&json!({
                "email": email,
                "username": "test",
                "password": "qwerty",
                "repeatPassword": "qwerty",
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn get_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(self.user_url(id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_user_by_credentials(&self, email: &str, password: &str) -> reqwest::Response {
        self.http_client
            .get(self.users_url())
            .query(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_user(&self, id: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .patch(self.user_url(id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .delete(self.user_url(id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Status and decoded error envelope of `response`.
pub async fn error_of(response: reqwest::Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.json().await.expect("error body is JSON");
    (status, body)
}
