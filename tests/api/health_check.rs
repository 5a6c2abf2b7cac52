//! tests/api/health_check.rs

use crate::helpers::setup;

#[tokio::test]
async fn health_check_works() {
    let test = setup().await;

    let response = test.get("/").await;

    assert!(response.status().is_success());
    assert_eq!("OK", response.text().await.expect("Failed to read body."));
}

#[tokio::test]
async fn health_check_replies_in_plain_text() {
    let test = setup().await;

    let response = test.get("/").await;

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header.")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn health_check_answers_any_method() {
    let test = setup().await;
    let client = reqwest::Client::new();

    for request in [
        client.post(format!("{}/", &test.address)),
        client.head(format!("{}/", &test.address)),
        client.delete(format!("{}/", &test.address)),
    ] {
        let response = request.send().await.expect("Failed to execute request.");
        assert!(response.status().is_success());
    }
}

#[tokio::test]
async fn other_paths_are_not_served() {
    let test = setup().await;

    let response = test.get("/does-not-exist").await;

    assert_eq!(404, response.status().as_u16());
}
