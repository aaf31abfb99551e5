//! Alert and alert subscription endpoints.

use crate::endpoints::request::{Transport, decode, encode_body};
use crate::error::Result;
use crate::models::{
    Alert, AlertSubscription, CreateAlertPayload, CreateAlertSubscriptionPayload,
    UpdateAlertPayload,
};

const ALERTS_PATH: &str = "/api/alerts";

fn alert_path(id: i64) -> String {
    format!("{ALERTS_PATH}/{id}")
}

fn subscriptions_path(alert_id: i64) -> String {
    format!("{ALERTS_PATH}/{alert_id}/subscriptions")
}

pub async fn list_alerts(transport: &Transport) -> Result<Vec<Alert>> {
    let response = transport.get(ALERTS_PATH, &[]).await?;
    decode(response, ALERTS_PATH).await
}

pub async fn get_alert(transport: &Transport, id: i64) -> Result<Alert> {
    let path = alert_path(id);
    let response = transport.get(&path, &[]).await?;
    decode(response, &path).await
}

pub async fn create_alert(transport: &Transport, payload: &CreateAlertPayload) -> Result<Alert> {
    let body = encode_body(payload)?;
    let response = transport.post(ALERTS_PATH, body, &[]).await?;
    decode(response, ALERTS_PATH).await
}

pub async fn update_alert(
    transport: &Transport,
    id: i64,
    payload: &UpdateAlertPayload,
) -> Result<Alert> {
    let path = alert_path(id);
    let body = encode_body(payload)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

pub async fn delete_alert(transport: &Transport, id: i64) -> Result<()> {
    transport.delete(&alert_path(id), &[]).await?;
    Ok(())
}

pub async fn list_alert_subscriptions(
    transport: &Transport,
    alert_id: i64,
) -> Result<Vec<AlertSubscription>> {
    let path = subscriptions_path(alert_id);
    let response = transport.get(&path, &[]).await?;
    decode(response, &path).await
}

/// Subscribe a destination to an alert. The alert is taken from `payload.alert_id`.
pub async fn create_alert_subscription(
    transport: &Transport,
    payload: &CreateAlertSubscriptionPayload,
) -> Result<AlertSubscription> {
    let path = subscriptions_path(payload.alert_id);
    let body = encode_body(payload)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

pub async fn delete_alert_subscription(
    transport: &Transport,
    alert_id: i64,
    subscription_id: i64,
) -> Result<()> {
    let path = format!("{}/{subscription_id}", subscriptions_path(alert_id));
    transport.delete(&path, &[]).await?;
    Ok(())
}
