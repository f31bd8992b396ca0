use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. The task API carries no credentials
/// or authentication, so a wide-open CORS policy matches its trust model.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
