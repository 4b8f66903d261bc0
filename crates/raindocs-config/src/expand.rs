//! Environment variable expansion for configuration strings.
//!
//! `raindocs.toml` string values may reference environment variables with
//! `${VAR}` (required) or `${VAR:-fallback}` (optional with fallback).
//! Plain text and bare `$VAR` pass through untouched.

use crate::ConfigError;

/// Variable reference that could not be satisfied from the environment.
struct MissingVar {
    name: String,
}

/// Expand `${VAR}` and `${VAR:-fallback}` references in a config value.
///
/// `field` names the configuration field being expanded and is carried
/// into the error so the author knows which setting to fix. A value with
/// no `${` in it is returned unchanged, which also keeps bare `$VAR`
/// text literal.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| -> Result<Option<String>, MissingVar> {
        std::env::var(name).map(Some).map_err(|_| MissingVar {
            name: name.to_owned(),
        })
    };

    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(e) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} is not set", e.cause.name),
        }),
    }
}
