use serde_json::json;

use crate::helpers::{TestApp, error_of};

#[tokio::test]
async fn create_returns_201_with_id() {
    let app = TestApp::new().await;

    let response = app
        .post_user(&json!({
            "email": "test@mail.com",
            "username": "test",
            "password": "qwerty",
            "repeatPassword": "qwerty",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"].as_str().map(str::len), Some(24));
}

#[tokio::test]
async fn empty_object_lists_every_blank_field() {
    let app = TestApp::new().await;

    let (status, body) = error_of(app.post_raw("{}").await).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({
            "message": "email: cannot be blank; password: cannot be blank; repeatPassword: cannot be blank; username: cannot be blank.",
            "developerMessage": "input validation failed. please, provide valid values",
            "code": 400,
        })
    );
}

#[tokio::test]
async fn unknown_key_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = error_of(
        app.post_raw(r#"{"email":"test@mail.com","extra":"x"}"#)
            .await,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], r#"request body contains unknown key "extra""#);
    assert_eq!(body["developerMessage"], "invalid request body");
}

#[tokio::test]
async fn malformed_and_empty_bodies_are_rejected() {
    let app = TestApp::new().await;

    let (status, body) = error_of(app.post_raw("").await).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "request body must not be empty");

    let (status, body) = error_of(app.post_raw(r#"{"email":1}"#).await).await;
    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        r#"request body contains incorrect JSON type for field "email""#
    );

    let (status, body) = error_of(app.post_raw("{}{}").await).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "request body must only contain single JSON value");
}

#[tokio::test]
async fn mismatched_passwords_are_rejected() {
    let app = TestApp::new().await;

    let (status, body) = error_of(
        app.post_user(&json!({
            "email": "test@mail.com",
            "username": "test",
            "password": "qwerty",
            "repeatPassword": "qwerty2",
        }))
        .await,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "passwords don't match");
    assert_eq!(body["developerMessage"], "provided passwords must to match");
}

#[tokio::test]
async fn second_registration_with_same_email_is_rejected() {
    let app = TestApp::new().await;
    app.create_user("test@mail.com").await;

    let (status, body) = error_of(
        app.post_user(&json!({
            "email": "test@mail.com",
            "username": "other",
            "password": "qwerty",
            "repeatPassword": "qwerty",
        }))
        .await,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "message": "email already taken", "code": 400 }));
}

#[tokio::test]
async fn null_body_is_validated_as_empty_object() {
    let app = TestApp::new().await;

    let (status, body) = error_of(app.post_raw("null").await).await;

    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        "email: cannot be blank; password: cannot be blank; repeatPassword: cannot be blank; username: cannot be blank."
    );
}
