//! Input validation for resolution.
//!
//! Shape checks for variable names, endpoint URLs, credential digits and
//! compiler versions. Nothing here reads the environment.

use url::Url;

/// Validate an environment variable name.
///
/// Variable names follow the usual shell rules:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns the reason the name was rejected.
pub fn validate_var_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("variable name cannot be empty".to_string());
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(format!("'{}' cannot start with a digit", name));
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(format!(
                "invalid character '{}' at position {} in '{}'",
                ch,
                i + 1,
                name
            ));
        }
    }

    Ok(())
}

/// Check that an endpoint is an absolute URL with a scheme and a host.
///
/// `https://goerli.example/v1` passes; `not-a-url`, `localhost:8545` and
/// `file:///tmp/x` do not. Any whitespace or control character fails before
/// parsing, because `Url::parse` strips them and the raw value is kept.
pub fn is_valid_endpoint(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    match Url::parse(value) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Check that a string is non-empty and made only of hex digits.
pub fn is_hex_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip one leading `0x`/`0X` prefix if present.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Check that a compiler version looks like `MAJOR.MINOR[.PATCH]`.
///
/// An optional `-prerelease` or `+build` suffix is allowed after the numeric
/// part, e.g. `0.8.20+commit.a1b79de6`.
pub fn is_valid_version(version: &str) -> bool {
    let core = version
        .split_once(['-', '+'])
        .map(|(core, rest)| if rest.is_empty() { "" } else { core })
        .unwrap_or(version);

    let parts: Vec<&str> = core.split('.').collect();
    if !(2..=3).contains(&parts.len()) {
        return false;
    }

    parts
        .iter()
        .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}
