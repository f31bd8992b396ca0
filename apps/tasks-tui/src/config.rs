use core_config::env_or_default;

/// Client configuration, supplied at startup via environment variables.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base API URL, including the `/api` prefix
    pub api_url: String,
}

impl ClientConfig {
    /// Reads `TASKS_API_URL`, defaulting to the local development server.
    pub fn from_env() -> Self {
        Self {
            api_url: env_or_default("TASKS_API_URL", "http://localhost:8080/api"),
        }
    }
}
