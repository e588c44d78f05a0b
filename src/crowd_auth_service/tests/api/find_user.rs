use crowd_auth_adapters::config::{CrowdSettings, setting_names::APP_NAME};
use crowd_auth_core::UserId;

use crate::helpers::{PASSWORD, TestApp, USERNAME, good_response};

#[tokio::test]
async fn unknown_id_returns_none() {
    let app = TestApp::new().await;

    assert!(app.validator.find_user_by_id(&UserId::new()).await.is_none());
}

#[tokio::test]
async fn known_id_returns_the_stored_user() {
    let app = TestApp::new().await;
    app.crowd_responds(good_response()).await;
    let user = app
        .validator
        .validate_credentials(USERNAME, PASSWORD)
        .await
        .expect("user should authenticate");

    let found = app.validator.find_user_by_id(&user.id).await;
    let found_again = app.validator.find_user_by_id(&user.id).await;

    assert_eq!(found.as_ref(), Some(&user));
    assert_eq!(found, found_again);
    assert_eq!(app.stored_user(USERNAME).await, Some(user));
}

#[tokio::test]
async fn undeclared_setting_lookup_names_the_setting() {
    let settings = CrowdSettings::from_iter([(APP_NAME, "foo")]);

    assert_eq!(settings.get(APP_NAME).unwrap(), "foo");
    let err = settings.get("FOO").unwrap_err();
    assert_eq!(err.to_string(), "'FOO' not found in crowd_auth settings");
}
