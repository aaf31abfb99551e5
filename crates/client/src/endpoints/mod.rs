//! REST API endpoint implementations.
//!
//! Each submodule maps one Redash resource onto free functions that take a
//! [`Transport`], build the path, and decode the typed response.

mod alerts;
mod dashboards;
mod destinations;
mod queries;
mod query_snippets;
mod request;
pub mod url_encoding;
mod visualizations;
mod widgets;

pub use alerts::{
    create_alert, create_alert_subscription, delete_alert, delete_alert_subscription, get_alert,
    list_alert_subscriptions, list_alerts, update_alert,
};
pub use dashboards::{
    archive_dashboard, create_dashboard, get_dashboard, list_dashboards, update_dashboard,
};
pub use destinations::{
    create_destination, delete_destination, get_destination, list_destination_types,
    list_destinations, update_destination,
};
pub use queries::{archive_query, create_query, get_query, list_queries, update_query};
pub use query_snippets::{
    create_query_snippet, delete_query_snippet, get_query_snippet, list_query_snippets,
    update_query_snippet,
};
pub use request::{QueryParams, Transport, decode, encode_body, send_request};
pub use url_encoding::encode_path_segment;
pub use visualizations::{
    create_visualization, delete_visualization, get_visualization, update_visualization,
};
pub use widgets::{create_widget, delete_widget, get_widget, update_widget};
