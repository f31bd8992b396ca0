//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers: configuration plus the MongoDB client. The store handle is
//! injected here rather than living in a global.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned for each handler (inexpensive Arc clones under the hood).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
