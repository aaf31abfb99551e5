//! Destination endpoint and option validation tests.
//!
//! This module tests the Redash destinations API:
//! - Listing and reading destinations and destination types
//! - Validating options against the fetched schema before create/update
//! - Deleting through the singular `/api/destination/{id}` path
//!
//! # Invariants
//! - Destination types are fetched before every create and update
//! - A validation failure means no create/update request reaches the server
//! - Lenient mode prunes undeclared options before sending

mod common;

use common::*;
use redash_client::{Destination, OptionValue, ValidationErrorKind};
use wiremock::matchers::{body_json, method, path};

async fn mount_types(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/destinations/types"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("destinations/list_destination_types.json")),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_destinations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/destinations"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("destinations/list_destinations.json")),
        )
        .mount(&mock_server)
        .await;

    let destinations = client_for(&mock_server).list_destinations().await.unwrap();
    assert_eq!(destinations.len(), 2);
    assert_eq!(destinations[1].name, "ops-slack");
    assert!(destinations[1].options.is_empty());
}

#[tokio::test]
async fn test_get_destination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/destinations/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("destinations/get_destination.json")),
        )
        .mount(&mock_server)
        .await;

    let destination = client_for(&mock_server).get_destination(4).await.unwrap();
    assert_eq!(destination.id, 4);
    assert_eq!(
        destination.options["channel"],
        OptionValue::String("#ops".to_string())
    );
}

#[tokio::test]
async fn test_list_destination_types() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    let types = client_for(&mock_server)
        .list_destination_types()
        .await
        .unwrap();

    assert_eq!(types.len(), 3);
    let pagerduty = &types[2].configuration_schema;
    assert_eq!(pagerduty.required, vec!["integration_key"]);
    assert_eq!(pagerduty.properties["priority"].type_, "number");
    assert_eq!(pagerduty.secret, vec!["integration_key"]);
}

#[tokio::test]
async fn test_type_mismatch_sends_no_create_request() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/destinations"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut destination = Destination::new("ops", "email").with_option("addresses", 5);

    let err = client_for(&mock_server)
        .create_destination(&mut destination)
        .await
        .unwrap_err();

    let validation = err.validation().expect("expected a validation error");
    assert_eq!(validation.kind(), ValidationErrorKind::TypeMismatch);
    assert_eq!(validation.field(), "addresses");
    assert!(!err.is_transport_error());
}

#[tokio::test]
async fn test_missing_required_sends_no_create_request() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/destinations"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut destination = Destination::new("ops", "slack").with_option("channel", "#ops");

    let err = client_for(&mock_server)
        .create_destination(&mut destination)
        .await
        .unwrap_err();

    assert_eq!(
        err.validation().map(|v| v.kind()),
        Some(ValidationErrorKind::MissingRequired)
    );
    assert_eq!(err.validation().map(|v| v.field()), Some("url"));
}

#[tokio::test]
async fn test_lenient_create_prunes_unknown_options() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/destinations"))
        .and(body_json(serde_json::json!({
            "name": "ops",
            "type": "slack",
            "options": {"url": "https://hooks.example.com/x"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 8,
            "name": "ops",
            "type": "slack",
            "icon": "fa-slack",
            "options": {"url": "--------"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut destination = Destination::new("ops", "slack")
        .with_option("url", "https://hooks.example.com/x")
        .with_option("color", "red");

    let created = client_for(&mock_server)
        .create_destination(&mut destination)
        .await
        .unwrap();

    assert_eq!(created.id, 8);
    assert!(!destination.options.contains_key("color"));
}

#[tokio::test]
async fn test_strict_create_rejects_unknown_options() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/destinations"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut destination = Destination::new("ops", "slack")
        .with_option("url", "https://hooks.example.com/x")
        .with_option("color", "red");

    let err = client_with_strictness(&mock_server, Strictness::Strict)
        .create_destination(&mut destination)
        .await
        .unwrap_err();

    assert_eq!(
        err.validation().map(|v| v.kind()),
        Some(ValidationErrorKind::UnknownField)
    );
    assert!(destination.options.contains_key("color"));
}

#[tokio::test]
async fn test_unknown_type_is_sent_unvalidated() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/destinations"))
        .and(body_json(serde_json::json!({
            "name": "hook",
            "type": "mattermost",
            "options": {"anything": 1}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 10,
            "name": "hook",
            "type": "mattermost"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut destination = Destination::new("hook", "mattermost").with_option("anything", 1);

    let created = client_with_strictness(&mock_server, Strictness::Strict)
        .create_destination(&mut destination)
        .await
        .unwrap();
    assert_eq!(created.id, 10);
}

#[tokio::test]
async fn test_update_destination_validates_first() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/destinations/4"))
        .and(body_json(serde_json::json!({
            "name": "pager",
            "type": "pagerduty",
            "options": {"integration_key": "abc", "priority": 2, "send_resolved": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 4,
            "name": "pager",
            "type": "pagerduty",
            "options": {"integration_key": "--------", "priority": 2, "send_resolved": true}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut destination = Destination::new("pager", "pagerduty")
        .with_option("integration_key", "abc")
        .with_option("priority", 2)
        .with_option("send_resolved", true);

    let updated = client_for(&mock_server)
        .update_destination(4, &mut destination)
        .await
        .unwrap();

    assert_eq!(updated.options["priority"], OptionValue::Integer(2));
    assert_eq!(updated.options["send_resolved"], OptionValue::Boolean(true));
}

#[tokio::test]
async fn test_update_fetched_destination_omits_id_from_body() {
    let mock_server = MockServer::start().await;
    mount_types(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/destinations/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("destinations/get_destination.json")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/destinations/4"))
        .and(body_json(serde_json::json!({
            "name": "ops-slack",
            "type": "slack",
            "icon": "fa-slack",
            "options": {"url": "--------", "channel": "#alerts", "username": "redash"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("destinations/get_destination.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut destination = client.get_destination(4).await.unwrap();
    destination
        .options
        .insert("channel".to_string(), OptionValue::from("#alerts"));

    let updated = client
        .update_destination(destination.id, &mut destination)
        .await
        .unwrap();
    assert_eq!(updated.id, 4);
}

#[tokio::test]
async fn test_schema_fetch_failure_aborts_create() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/destinations/types"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/destinations"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut destination = Destination::new("ops", "email").with_option("addresses", "a@b.c");
    let err = client_for(&mock_server)
        .create_destination(&mut destination)
        .await
        .unwrap_err();

    assert!(err.is_transport_error());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_delete_destination_uses_singular_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/destination/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server).delete_destination(4).await.unwrap();
}
