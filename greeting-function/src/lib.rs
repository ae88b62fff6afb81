//! greeting-function: Hello World greeting packaged as a cloud function.
//!
//! The hosting platform owns the listener and dispatches each request to
//! [`greet`]; there is no server loop and no logging in this variant.

use greeting_core::greeting;
use lamedh_http::{
    lambda::{Context, Error},
    IntoResponse, Request, RequestExt,
};

/// Respond to a dispatched request with the greeting.
///
/// The name comes from the `name` query parameter when present and non-empty,
/// then from the `NAME` environment variable, then the default. The handler
/// itself cannot fail; the `Result` is the shape the runtime expects.
pub async fn greet(request: Request, _: Context) -> Result<impl IntoResponse, Error> {
    let params = request.query_string_parameters();
    let env_name = greeting::name_from_env();

    Ok(greeting::render(greeting::resolve_name(
        params.get("name"),
        env_name.as_deref(),
    )))
}
