//! HTTP endpoint tests using axum-test against in-memory dependencies.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use server_core::kernel::test_dependencies::{
    organization, MockDirectory, MockNotificationTransport, MockTextGenerator, TEST_MAIL_FROM,
};
use server_core::kernel::TestDependencies;
use server_core::server::build_app;
use server_core::server::routes::{MATCHES_SENT_MESSAGE, NO_MATCHES_MESSAGE};

fn server(test_deps: &TestDependencies) -> TestServer {
    let app = build_app(Arc::new(test_deps.server_deps()), None);
    TestServer::new(app).unwrap()
}

// =============================================================================
// POST /api/match-resources
// =============================================================================

#[tokio::test]
async fn match_resources_sends_notifications() {
    let test_deps = TestDependencies::new().with_directory(
        MockDirectory::new().with_organization(organization(
            "legal@x.org",
            &["Legal Advice"],
            &["SEO"],
        )),
    );

    let response = server(&test_deps)
        .post("/api/match-resources")
        .json(&json!({
            "newUser": {
                "email": "seo@x.org",
                "businessName": "SEO Co",
                "resourcesHave": "SEO",
                "resourcesNeeded": ["Legal Advice"]
            }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], MATCHES_SENT_MESSAGE);
    assert_eq!(body["report"]["matchCount"], 1);
    assert_eq!(body["report"]["deliveries"].as_array().unwrap().len(), 2);

    let sent = test_deps.transport.sent_to("legal@x.org");
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("(\"SEO Co\")"));
}

#[tokio::test]
async fn match_resources_without_matches() {
    let test_deps = TestDependencies::new();

    let response = server(&test_deps)
        .post("/api/match-resources")
        .json(&json!({ "newUser": { "email": "seo@x.org", "resourcesHave": ["SEO"] } }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], NO_MATCHES_MESSAGE);
    assert_eq!(test_deps.transport.attempt_count(), 0);
}

#[tokio::test]
async fn match_resources_send_failure_still_succeeds() {
    let test_deps = TestDependencies::new()
        .with_directory(
            MockDirectory::new().with_organization(organization("legal@x.org", &["Legal Advice"], &[])),
        )
        .with_transport(MockNotificationTransport::new().with_failing_recipient("legal@x.org"));

    let response = server(&test_deps)
        .post("/api/match-resources")
        .json(&json!({ "newUser": { "email": "seo@x.org", "resourcesNeeded": ["Legal Advice"] } }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let deliveries = body["report"]["deliveries"].as_array().unwrap();
    assert_eq!(deliveries[0]["outcome"]["status"], "failed");
    assert_eq!(deliveries[1]["outcome"]["status"], "sent");
}

#[tokio::test]
async fn match_resources_requires_new_user() {
    let test_deps = TestDependencies::new();

    let response = server(&test_deps)
        .post("/api/match-resources")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "newUser data not provided");
    assert_eq!(test_deps.directory.read_count(), 0);
}

#[tokio::test]
async fn match_resources_rejects_missing_body() {
    let test_deps = TestDependencies::new();

    let response = server(&test_deps).post("/api/match-resources").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn match_resources_rejects_blank_email() {
    let test_deps = TestDependencies::new();

    let response = server(&test_deps)
        .post("/api/match-resources")
        .json(&json!({ "newUser": { "email": "  " } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn match_resources_directory_outage_is_500() {
    let test_deps = TestDependencies::new().with_directory(MockDirectory::new().unavailable());

    let response = server(&test_deps)
        .post("/api/match-resources")
        .json(&json!({ "newUser": { "email": "seo@x.org", "resourcesHave": ["SEO"] } }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Directory store unavailable"));
}

// =============================================================================
// POST /api/chatbot
// =============================================================================

#[tokio::test]
async fn chatbot_returns_generated_response() {
    let test_deps = TestDependencies::new()
        .with_text_generator(MockTextGenerator::new().with_response("Why did the chicken..."));

    let response = server(&test_deps)
        .post("/api/chatbot")
        .json(&json!({ "message": "tell me a joke" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["response"], "Why did the chicken...");
}

#[tokio::test]
async fn chatbot_degrades_to_default_response() {
    let test_deps =
        TestDependencies::new().with_text_generator(MockTextGenerator::new().failing());

    let response = server(&test_deps)
        .post("/api/chatbot")
        .json(&json!({ "message": "who has SEO?" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["response"], "No response from AI");
}

#[tokio::test]
async fn chatbot_requires_message() {
    let test_deps = TestDependencies::new();
    let server = server(&test_deps);

    for payload in [json!({}), json!({ "message": "" }), json!({ "message": "   " })] {
        let response = server.post("/api/chatbot").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Message is required");
    }
    assert_eq!(test_deps.text_generator.call_count(), 0);
}

// =============================================================================
// GET /api/test-email and /health
// =============================================================================

#[tokio::test]
async fn test_email_goes_to_sender_address() {
    let test_deps = TestDependencies::new();

    let response = server(&test_deps).get("/api/test-email").await;

    response.assert_status_ok();
    assert_eq!(test_deps.transport.sent_to(TEST_MAIL_FROM).len(), 1);
}

#[tokio::test]
async fn test_email_failure_is_500() {
    let test_deps = TestDependencies::new()
        .with_transport(MockNotificationTransport::new().with_failing_recipient(TEST_MAIL_FROM));

    let response = server(&test_deps).get("/api/test-email").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_directory_state() {
    let healthy = TestDependencies::new();
    let response = server(&healthy).get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");

    let unhealthy = TestDependencies::new().with_directory(MockDirectory::new().unavailable());
    let response = server(&unhealthy).get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}
