//! Redash REST API client.
//!
//! This crate provides a typed client for the Redash REST API: queries,
//! dashboards, widgets, visualizations, alerts, alert subscriptions,
//! destinations and query snippets. Destination options are checked against
//! the server's destination-type schema before every create and update.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod validation;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::RedashClient;
pub use client::builder::RedashClientBuilder;
pub use endpoints::Transport;
pub use error::{ClientError, Result, ValidationError, ValidationErrorKind};
pub use models::{
    Alert, AlertOptions, AlertSubscription, CreateAlertPayload, CreateAlertSubscriptionPayload,
    CreateQuerySnippetPayload, Dashboard, DashboardCreatePayload, DashboardUpdatePayload,
    Destination, DestinationType, OptionValue, Page, Query, QueryCreatePayload, QuerySnippet,
    QueryUpdatePayload, UpdateAlertPayload, UpdateQuerySnippetPayload, User, Visualization,
    VisualizationCreatePayload, VisualizationUpdatePayload, Widget, WidgetCreatePayload,
    WidgetUpdatePayload,
};
pub use redash_config::Strictness;
pub use validation::validate_destination_options;
