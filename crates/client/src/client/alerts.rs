//! Alert API methods for [`RedashClient`].
//!
//! # What this module handles:
//! - Alert CRUD
//! - Listing, creating and deleting alert subscriptions
//!
//! # What this module does NOT handle:
//! - Low-level alert endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::RedashClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    Alert, AlertSubscription, CreateAlertPayload, CreateAlertSubscriptionPayload,
    UpdateAlertPayload,
};

impl RedashClient {
    pub async fn list_alerts(&self) -> Result<Vec<Alert>> {
        endpoints::list_alerts(&self.transport).await
    }

    pub async fn get_alert(&self, id: i64) -> Result<Alert> {
        endpoints::get_alert(&self.transport, id).await
    }

    pub async fn create_alert(&self, payload: &CreateAlertPayload) -> Result<Alert> {
        endpoints::create_alert(&self.transport, payload).await
    }

    pub async fn update_alert(&self, id: i64, payload: &UpdateAlertPayload) -> Result<Alert> {
        endpoints::update_alert(&self.transport, id, payload).await
    }

    pub async fn delete_alert(&self, id: i64) -> Result<()> {
        endpoints::delete_alert(&self.transport, id).await
    }

    pub async fn list_alert_subscriptions(&self, alert_id: i64) -> Result<Vec<AlertSubscription>> {
        endpoints::list_alert_subscriptions(&self.transport, alert_id).await
    }

    /// Subscribe a destination to the alert named by `payload.alert_id`.
    pub async fn create_alert_subscription(
        &self,
        payload: &CreateAlertSubscriptionPayload,
    ) -> Result<AlertSubscription> {
        endpoints::create_alert_subscription(&self.transport, payload).await
    }

    pub async fn delete_alert_subscription(&self, alert_id: i64, subscription_id: i64) -> Result<()> {
        endpoints::delete_alert_subscription(&self.transport, alert_id, subscription_id).await
    }
}
