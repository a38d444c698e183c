//! HTTP scrape endpoint.
//!
//! # Supported Endpoints
//!
//! - `/metrics?target=<host>[:port]` - Probe one appliance and expose its status
//! - `/` - Short usage text
//!
//! Every scrape probes the appliance once. A failed probe is logged and
//! answered with an empty, successful exposition so that the scrape itself
//! keeps succeeding while the appliance is unreachable.

/// Data structures shared by the request handlers.
pub mod structs;

/// Implementation blocks for HTTP service components.
pub mod impls;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
