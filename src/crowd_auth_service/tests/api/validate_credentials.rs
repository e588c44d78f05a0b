use crowd_auth_adapters::config::{
    CrowdSettings,
    setting_names::{APP_NAME, URL},
};
use crowd_auth_core::{LocalUser, UserId, UserStore, Username};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, query_param},
};

use crate::helpers::{AUTH_PATH, PASSWORD, TestApp, USERNAME, good_response};

#[tokio::test]
async fn first_login_creates_local_user() {
    let app = TestApp::new().await;
    app.crowd_responds(good_response()).await;
    assert!(app.stored_user(USERNAME).await.is_none());

    let user = app
        .validator
        .validate_credentials(USERNAME, PASSWORD)
        .await
        .expect("user should authenticate");

    assert_eq!(user.username.as_str(), USERNAME);
    assert_eq!(user.email, "kraken.mckraken@example.com");
    assert_eq!(user.first_name, "Kraken");
    assert_eq!(user.last_name, "");
    assert!(!user.is_staff);
    assert!(!user.is_superuser);
    assert!(!user.has_usable_password);
    assert_eq!(app.stored_user(USERNAME).await, Some(user));
}

#[tokio::test]
async fn repeated_logins_reuse_the_local_user() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .respond_with(good_response())
        .expect(2)
        .mount(&app.crowd_server)
        .await;

    let first = app.validator.validate_credentials(USERNAME, PASSWORD).await;
    let second = app.validator.validate_credentials(USERNAME, PASSWORD).await;

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[tokio::test]
async fn existing_local_user_is_not_overwritten() {
    let app = TestApp::new().await;
    app.crowd_responds(good_response()).await;
    let existing = LocalUser {
        id: UserId::new(),
        username: Username::parse(USERNAME).unwrap(),
        email: "kraken@old.example.com".to_string(),
        first_name: "Kraken".to_string(),
        last_name: "McKraken".to_string(),
        is_staff: true,
        is_superuser: true,
        has_usable_password: false,
        date_joined: "2020-01-01T00:00:00Z".parse().unwrap(),
    };
    app.user_store.save(existing.clone()).await.unwrap();

    let user = app.validator.validate_credentials(USERNAME, PASSWORD).await;

    assert_eq!(user, Some(existing));
}

#[tokio::test]
async fn rejected_login_creates_nothing() {
    let app = TestApp::new().await;
    app.crowd_responds(ResponseTemplate::new(400).set_body_json(json!({ "message": "zizzle" })))
        .await;

    let user = app.validator.validate_credentials(USERNAME, PASSWORD).await;

    assert!(user.is_none());
    assert!(app.stored_user(USERNAME).await.is_none());
}

#[tokio::test]
async fn rejected_login_leaves_existing_user_alone() {
    let app = TestApp::new().await;
    app.crowd_responds(ResponseTemplate::new(403).set_body_json(json!({ "message": "zizzle" })))
        .await;
    let existing = LocalUser {
        id: UserId::new(),
        username: Username::parse(USERNAME).unwrap(),
        email: "kraken.mckraken@example.com".to_string(),
        first_name: String::new(),
        last_name: String::new(),
        is_staff: false,
        is_superuser: false,
        has_usable_password: false,
        date_joined: "2021-06-01T12:00:00Z".parse().unwrap(),
    };
    app.user_store.save(existing.clone()).await.unwrap();

    let user = app.validator.validate_credentials(USERNAME, PASSWORD).await;

    assert!(user.is_none());
    assert_eq!(app.stored_user(USERNAME).await, Some(existing));
}

#[tokio::test]
async fn unparseable_responses_yield_no_user() {
    for status in [200, 400] {
        let app = TestApp::new().await;
        app.crowd_responds(ResponseTemplate::new(status).set_body_string("fibnozzle"))
            .await;

        let user = app.validator.validate_credentials(USERNAME, PASSWORD).await;

        assert!(user.is_none(), "status {status} should not authenticate");
        assert!(app.stored_user(USERNAME).await.is_none());
    }
}

#[tokio::test]
async fn empty_identity_yields_no_user() {
    let app = TestApp::new().await;
    app.crowd_responds(ResponseTemplate::new(200).set_body_json(json!({})))
        .await;

    assert!(app
        .validator
        .validate_credentials(USERNAME, PASSWORD)
        .await
        .is_none());
    assert!(app.stored_user(USERNAME).await.is_none());
}

#[tokio::test]
async fn missing_app_password_never_contacts_crowd() {
    let crowd_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(good_response())
        .expect(0)
        .mount(&crowd_server)
        .await;
    let settings = CrowdSettings::from_iter([
        (APP_NAME, "fubar".to_string()),
        (URL, format!("{}{}", crowd_server.uri(), AUTH_PATH)),
    ]);
    let app = TestApp::with_settings(crowd_server, &settings);

    let user = app.validator.validate_credentials(USERNAME, PASSWORD).await;

    assert!(user.is_none());
    assert!(app.stored_user(USERNAME).await.is_none());
}

#[tokio::test]
async fn empty_username_never_contacts_crowd() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .respond_with(good_response())
        .expect(0)
        .mount(&app.crowd_server)
        .await;

    assert!(app.validator.validate_credentials("", PASSWORD).await.is_none());
}

#[tokio::test]
async fn padded_username_is_forwarded_verbatim() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(query_param("username", " kraken.mckraken"))
        .respond_with(good_response())
        .expect(1)
        .mount(&app.crowd_server)
        .await;

    let user = app
        .validator
        .validate_credentials(" kraken.mckraken", PASSWORD)
        .await
        .expect("Crowd accepted the padded username");

    assert_eq!(user.username.as_str(), " kraken.mckraken");
}

#[tokio::test]
async fn empty_password_is_left_to_crowd() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(query_param("username", USERNAME))
        .and(body_json(json!({ "value": "" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "zizzle" })))
        .expect(1)
        .mount(&app.crowd_server)
        .await;

    assert!(app.validator.validate_credentials(USERNAME, "").await.is_none());
    assert!(app.stored_user(USERNAME).await.is_none());
}
