use serde_json::json;

use crate::helpers::{TestApp, error_of};

#[tokio::test]
async fn update_changes_fields_and_password() {
    let app = TestApp::new().await;
    let id = app.create_user("test@mail.com").await;

    let response = app
        .patch_user(
            &id,
            &json!({
                "email": "new@mail.com",
                "username": "renamed",
                "oldPassword": "qwerty",
                "newPassword": "qwerty2",
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = app.get_user(&id).await.json().await.unwrap();
    assert_eq!(body["email"], "new@mail.com");
    assert_eq!(body["username"], "renamed");

    let response = app.get_user_by_credentials("new@mail.com", "qwerty2").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn wrong_old_password_leaves_account_untouched() {
    let app = TestApp::new().await;
    let id = app.create_user("test@mail.com").await;

    let (status, body) = error_of(
        app.patch_user(
            &id,
            &json!({ "oldPassword": "qwerty2", "newPassword": "qwerty3" }),
        )
        .await,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({
            "message": "wrong email or password",
            "developerMessage": "you entered wrong password",
            "code": 400,
        })
    );

    let response = app.get_user_by_credentials("test@mail.com", "qwerty").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn missing_old_password_fails_validation() {
    let app = TestApp::new().await;
    let id = app.create_user("test@mail.com").await;

    let (status, body) = error_of(app.patch_user(&id, &json!({ "username": "renamed" })).await).await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "oldPassword: cannot be blank.");
    assert_eq!(body["developerMessage"], "you have provided invalid values");
}

#[tokio::test]
async fn taken_email_is_rejected() {
    let app = TestApp::new().await;
    app.create_user("first@mail.com").await;
    let id = app.create_user("second@mail.com").await;

    let (status, body) = error_of(
        app.patch_user(
            &id,
            &json!({ "email": "first@mail.com", "oldPassword": "qwerty" }),
        )
        .await,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "email already taken");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = TestApp::new().await;

    let (status, _) = error_of(
        app.patch_user(
            "62056f8cf21b83383a5ae7fa",
            &json!({ "oldPassword": "qwerty" }),
        )
        .await,
    )
    .await;

    assert_eq!(status, 404);
}
