//! Data models for Redash API responses and request payloads.
//!
//! This module contains all data structures used to represent the records the
//! Redash REST API returns and the payloads it accepts. Models are organized
//! by resource kind and re-exported here for convenience.
//!
//! # Submodules
//! - [`common`]: Shared types (users, paginated lists, error bodies)
//! - [`queries`]: Saved queries, schedules, and query parameters
//! - [`dashboards`]: Dashboards and their create/update payloads
//! - [`widgets`]: Dashboard widgets and layout options
//! - [`visualizations`]: Query visualizations and chart options
//! - [`alerts`]: Alerts and alert subscriptions
//! - [`destinations`]: Alert destinations, option values, and type schemas
//! - [`query_snippets`]: Reusable query snippets
//!
//! # What this module does NOT handle:
//! - HTTP requests (see [`crate::endpoints`])
//! - Destination option validation (see [`crate::validation`])

pub mod alerts;
pub mod common;
pub mod dashboards;
pub mod destinations;
pub mod queries;
pub mod query_snippets;
pub mod visualizations;
pub mod widgets;

pub use alerts::{
    Alert, AlertOptions, AlertSubscription, CreateAlertPayload, CreateAlertSubscriptionPayload,
    UpdateAlertPayload,
};
pub use common::{ErrorBody, Page, User};
pub use dashboards::{Dashboard, DashboardCreatePayload, DashboardUpdatePayload};
pub use destinations::{
    Destination, DestinationType, DestinationTypeSchema, OptionValue, PropertyField,
};
pub use queries::{
    Query, QueryCreatePayload, QueryOptions, QueryOptionsParameter, QuerySchedule,
    QueryUpdatePayload,
};
pub use query_snippets::{CreateQuerySnippetPayload, QuerySnippet, UpdateQuerySnippetPayload};
pub use visualizations::{
    SeriesOptions, Visualization, VisualizationAxisOptions, VisualizationCreatePayload,
    VisualizationLabelOptions, VisualizationLegendOptions, VisualizationOptions,
    VisualizationUpdatePayload,
};
pub use widgets::{
    Widget, WidgetCreatePayload, WidgetOptions, WidgetParameterMapping, WidgetPosition,
    WidgetUpdatePayload,
};
