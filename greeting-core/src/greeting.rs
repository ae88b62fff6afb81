//! Name resolution and greeting formatting shared by both deployment
//! variants.

use std::env;

/// Name used in the greeting when no override is present.
pub const DEFAULT_NAME: &str = "World";

/// Environment variable consulted for a name override. Lookup is exact and
/// case-sensitive.
pub const NAME_VAR: &str = "NAME";

/// Resolve the name to greet.
///
/// Precedence, highest first: an explicit override (the `name` query
/// parameter, where the variant supports one), then the `NAME` environment
/// value, then [`DEFAULT_NAME`]. Resolution stops at the first non-empty
/// value; empty strings count as absent.
pub fn resolve_name<'a>(explicit: Option<&'a str>, env_value: Option<&'a str>) -> &'a str {
    explicit
        .filter(|name| !name.is_empty())
        .or_else(|| env_value.filter(|name| !name.is_empty()))
        .unwrap_or(DEFAULT_NAME)
}

/// Format the greeting body for `name`.
///
/// The trailing newline is part of the response contract.
pub fn render(name: &str) -> String {
    format!("Hello {name}!\n")
}

/// Read the `NAME` override from the process environment.
///
/// Unset, empty, and non-unicode values all yield `None`; callers cannot
/// distinguish them, and all default identically.
pub fn name_from_env() -> Option<String> {
    env::var(NAME_VAR).ok().filter(|name| !name.is_empty())
}
