use axum::http::{Method, Uri};
use greeting_core::greeting;

/// Respond to any request with the greeting.
///
/// One diagnostic line is logged before the response is computed. The name
/// comes from the `NAME` environment variable, read per request; this variant
/// has no query-parameter source.
pub async fn greet(method: Method, uri: Uri) -> String {
    tracing::info!("received request: {} {}", method, uri.path());

    let env_name = greeting::name_from_env();
    greeting::render(greeting::resolve_name(None, env_name.as_deref()))
}
