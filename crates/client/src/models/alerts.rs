//! Alert models for the Redash alerts API.
//!
//! # What this module handles:
//! - Alert records and their trigger options
//! - Alert subscriptions linking an alert to a destination
//! - Create/update payloads
//!
//! # What this module does NOT handle:
//! - Evaluating alert conditions (the service does that)
//! - Direct HTTP API calls (see [`crate::endpoints::alerts`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;
use super::destinations::Destination;
use super::queries::Query;
use crate::serde_helpers::{is_false, is_zero};

/// A Redash alert on a query result column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub id: i64,
    pub name: String,
    pub options: AlertOptions,
    /// One of `unknown`, `triggered` or `ok`.
    pub state: String,
    pub last_triggered_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    /// Seconds to wait before re-triggering; `None` means notify once.
    pub rearm: Option<i64>,
    pub query: Option<Query>,
    pub user: Option<User>,
}

/// Trigger condition and notification template of an alert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub op: String,
    /// Threshold; Redash accepts numbers and strings here.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "is_false")]
    pub muted: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_subject: Option<String>,
}

/// Payload for `POST /api/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAlertPayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub query_id: i64,
    pub options: AlertOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rearm: Option<i64>,
}

/// Payload for `POST /api/alerts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateAlertPayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub query_id: i64,
    pub options: AlertOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rearm: Option<i64>,
}

/// A destination (or user e-mail) subscribed to an alert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSubscription {
    pub id: i64,
    pub alert_id: i64,
    pub user: Option<User>,
    /// `None` for subscriptions that notify the subscribing user by e-mail.
    pub destination: Option<Destination>,
}

/// Payload for `POST /api/alerts/{alert_id}/subscriptions`.
///
/// `alert_id` selects the request path as well as being sent in the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAlertSubscriptionPayload {
    #[serde(skip_serializing_if = "is_zero")]
    pub alert_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub destination_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_with_null_rearm_and_trigger() {
        let json = r#"{
            "id": 2,
            "name": "New Query: fv > 1",
            "options": {"op": ">", "value": 1, "muted": false, "column": "col1"},
            "state": "unknown",
            "last_triggered_at": null,
            "rearm": null,
            "updated_at": "2023-01-03T02:57:24.435Z",
            "created_at": "2023-01-03T02:57:24.435Z"
        }"#;

        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.id, 2);
        assert_eq!(alert.options.op, ">");
        assert_eq!(alert.options.value, serde_json::json!(1));
        assert!(alert.rearm.is_none());
        assert!(alert.last_triggered_at.is_none());
        assert!(alert.query.is_none());
    }

    #[test]
    fn test_create_payload_serialization() {
        let payload = CreateAlertPayload {
            name: "errors".to_string(),
            query_id: 5,
            options: AlertOptions {
                op: "greater than".to_string(),
                value: serde_json::json!(100),
                column: "count".to_string(),
                ..Default::default()
            },
            rearm: Some(300),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "errors",
                "query_id": 5,
                "options": {"op": "greater than", "value": 100, "column": "count"},
                "rearm": 300
            })
        );
    }

    #[test]
    fn test_subscription_without_destination() {
        let json = r#"{"id": 7, "alert_id": 2, "user": {"id": 1, "name": "admin", "email": "a@example.com"}}"#;
        let sub: AlertSubscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.alert_id, 2);
        assert!(sub.destination.is_none());
        assert_eq!(sub.user.map(|u| u.id), Some(1));
    }
}
