use crate::helpers::{TestApp, error_of};

#[tokio::test]
async fn matching_credentials_return_the_account() {
    let app = TestApp::new().await;
    let id = app.create_user("test@mail.com").await;

    let response = app.get_user_by_credentials("test@mail.com", "qwerty").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["uuid"], id.as_str());
}

#[tokio::test]
async fn wrong_password_is_bad_request() {
    let app = TestApp::new().await;
    app.create_user("test@mail.com").await;

    let (status, body) = error_of(
        app.get_user_by_credentials("test@mail.com", "qwerty2")
            .await,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "wrong email or password");
}

#[tokio::test]
async fn unknown_email_is_not_found() {
    let app = TestApp::new().await;

    let (status, _) = error_of(
        app.get_user_by_credentials("nobody@mail.com", "qwerty")
            .await,
    )
    .await;

    assert_eq!(status, 404);
}

#[tokio::test]
async fn missing_credentials_are_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(app.users_url())
        .send()
        .await
        .expect("Failed to execute request");
    let (status, body) = error_of(response).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "empty email or password");
    assert_eq!(body["developerMessage"], "email and password must be provided");

    let (status, _) = error_of(app.get_user_by_credentials("test@mail.com", "").await).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn repeated_query_keys_use_first_value() {
    let app = TestApp::new().await;
    let id = app.create_user("test@mail.com").await;

    let response = app
        .http_client
        .get(format!(
            "{}?email=test@mail.com&email=x@y.com&password=qwerty",
            app.users_url()
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["uuid"], id.as_str());
}
