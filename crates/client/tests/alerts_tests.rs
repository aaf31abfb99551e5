//! Alert and alert subscription endpoint tests.
//!
//! # Invariants
//! - Subscription creation targets the alert named in the payload
//! - Subscription deletion uses `/api/alerts/{alert_id}/subscriptions/{id}`

mod common;

use common::*;
use redash_client::{
    AlertOptions, CreateAlertPayload, CreateAlertSubscriptionPayload, UpdateAlertPayload,
};
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_list_alerts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/list_alerts.json")))
        .mount(&mock_server)
        .await;

    let alerts = client_for(&mock_server).list_alerts().await.unwrap();

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].options.column, "col1");
    assert!(alerts[0].rearm.is_none());
    assert_eq!(alerts[0].query.as_ref().map(|q| q.id), Some(5));
    assert_eq!(alerts[1].state, "triggered");
    assert_eq!(alerts[1].rearm, Some(3600));
    assert!(alerts[1].options.muted);
    assert_eq!(alerts[1].options.custom_subject.as_deref(), Some("Errors up"));
    assert!(alerts[1].last_triggered_at.is_some());
}

#[tokio::test]
async fn test_get_alert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 2,
            "name": "New Query: fv > 1",
            "options": {"op": ">", "value": 1, "column": "col1"},
            "state": "ok"
        })))
        .mount(&mock_server)
        .await;

    let alert = client_for(&mock_server).get_alert(2).await.unwrap();
    assert_eq!(alert.state, "ok");
    assert_eq!(alert.options.value, serde_json::json!(1));
}

#[tokio::test]
async fn test_create_alert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/alerts"))
        .and(body_json(serde_json::json!({
            "name": "Too many errors",
            "query_id": 5,
            "options": {"op": ">", "value": 10, "column": "errors"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9,
            "name": "Too many errors",
            "options": {"op": ">", "value": 10, "column": "errors"},
            "state": "unknown",
            "rearm": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = CreateAlertPayload {
        name: "Too many errors".to_string(),
        query_id: 5,
        options: AlertOptions {
            op: ">".to_string(),
            value: serde_json::json!(10),
            column: "errors".to_string(),
            ..Default::default()
        },
        rearm: None,
    };

    let alert = client_for(&mock_server).create_alert(&payload).await.unwrap();
    assert_eq!(alert.id, 9);
    assert_eq!(alert.name, payload.name);
    assert_eq!(alert.options, payload.options);
}

#[tokio::test]
async fn test_update_and_delete_alert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/alerts/9"))
        .and(body_json(serde_json::json!({"name": "Renamed", "options": {}, "rearm": 60})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9,
            "name": "Renamed",
            "rearm": 60
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/alerts/9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let alert = client
        .update_alert(
            9,
            &UpdateAlertPayload {
                name: "Renamed".to_string(),
                rearm: Some(60),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(alert.rearm, Some(60));

    client.delete_alert(9).await.unwrap();
}

#[tokio::test]
async fn test_list_alert_subscriptions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts/2/subscriptions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("alerts/list_subscriptions.json")),
        )
        .mount(&mock_server)
        .await;

    let subscriptions = client_for(&mock_server)
        .list_alert_subscriptions(2)
        .await
        .unwrap();

    assert_eq!(subscriptions.len(), 2);
    assert!(subscriptions[0].destination.is_none());
    assert_eq!(
        subscriptions[1].destination.as_ref().map(|d| d.type_.as_str()),
        Some("slack")
    );
}

#[tokio::test]
async fn test_create_alert_subscription_uses_payload_alert_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/alerts/2/subscriptions"))
        .and(body_json(serde_json::json!({"alert_id": 2, "destination_id": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 3,
            "alert_id": 2,
            "destination": {"id": 4, "name": "ops-slack", "type": "slack", "icon": "fa-slack"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let subscription = client_for(&mock_server)
        .create_alert_subscription(&CreateAlertSubscriptionPayload {
            alert_id: 2,
            destination_id: 4,
        })
        .await
        .unwrap();

    assert_eq!(subscription.id, 3);
    assert_eq!(subscription.destination.map(|d| d.id), Some(4));
}

#[tokio::test]
async fn test_delete_alert_subscription_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/alerts/2/subscriptions/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .delete_alert_subscription(2, 3)
        .await
        .unwrap();
}
