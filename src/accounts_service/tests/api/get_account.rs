use serde_json::json;

use crate::helpers::{TestApp, error_of};

#[tokio::test]
async fn created_account_is_returned_without_password() {
    let app = TestApp::new().await;
    let id = app.create_user("test@mail.com").await;

    let response = app.get_user(&id).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["uuid"], id.as_str());
    assert_eq!(body["email"], "test@mail.com");
    assert_eq!(body["username"], "test");
    assert_eq!(body["verified"], false);
    assert!(body.get("password").is_none());
    assert_eq!(body["registeredAt"].as_str().map(str::len), Some(10));
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = error_of(app.get_user("not-an-id").await).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "message": "invalid uuid", "code": 400 }));
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = error_of(app.get_user("62056f8cf21b83383a5ae7fa").await).await;

    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({
            "message": "requested resource is not found",
            "developerMessage": "please, double check your request",
            "code": 404,
        })
    );
}
