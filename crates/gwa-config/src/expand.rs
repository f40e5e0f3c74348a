//! Environment variable expansion for `gwa.toml` values.
//!
//! Only `site.tree` and `tracking.google_tag_manager_id` are expanded. Both are
//! single-line values, so surrounding whitespace in a variable (a trailing
//! newline from a secrets file, say) is dropped and a blank variable counts
//! as unset.

use std::borrow::Cow;

use crate::ConfigError;

/// Why a referenced variable could not be used.
enum Unusable {
    Unset,
    Blank,
}

/// Expand `${VAR}` and `${VAR:-default}` references in a setting.
///
/// The default applies when `VAR` is unset or blank. A string without `${`
/// is returned as is, bare `$VAR` included.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|e| {
            let reason = match e.cause {
                Unusable::Unset => "not set",
                Unusable::Blank => "is blank",
            };
            ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} {reason}", e.var_name),
            }
        })
}

fn lookup(var: &str) -> Result<Option<String>, Unusable> {
    let value = std::env::var(var).map_err(|_| Unusable::Unset)?;
    let value = value.trim();
    if value.is_empty() {
        return Err(Unusable::Blank);
    }
    Ok(Some(value.to_owned()))
}
