//! Target address normalisation.
//!
//! [URL Standard](https://url.spec.whatwg.org/)
//!
//! Users type `example.com`, `//cdn.example.com/page` or a local file path;
//! the browser layer needs an absolute URL it can navigate to, and the report
//! cache needs a stable key for it.

use std::path::Path;

/// Errors produced while normalising a target.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlError {
    /// The target was empty or whitespace only.
    #[error("empty target")]
    Empty,
    /// The target contains characters that cannot appear in a URL or path.
    #[error("invalid target '{0}'")]
    Invalid(String),
}

/// Schemes that are navigable as given.
const ABSOLUTE_SCHEMES: &[&str] = &["http://", "https://", "file://", "about:", "data:"];

/// Turn a user-supplied target into an absolute, navigable URL.
///
/// # Algorithm
///
/// STEP 1: "If url is an absolute URL, return url." Known schemes pass through.
///
/// STEP 2: Protocol-relative URLs (`//host/path`) take the `https:` scheme.
///
/// STEP 3: An existing local path becomes a `file://` URL of its canonical form.
///
/// STEP 4: Anything else is treated as a host name and gets `https://`.
///
/// # Errors
///
/// Returns [`UrlError::Empty`] for blank input and [`UrlError::Invalid`] when
/// the target contains whitespace.
pub fn normalize_target(input: &str) -> Result<String, UrlError> {
    let target = input.trim();
    if target.is_empty() {
        return Err(UrlError::Empty);
    }

    // STEP 1
    let lowered = target.to_ascii_lowercase();
    if ABSOLUTE_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        return Ok(target.to_string());
    }

    // STEP 2
    if target.starts_with("//") {
        return Ok(format!("https:{target}"));
    }

    // STEP 3
    if let Ok(canonical) = Path::new(target).canonicalize() {
        return Ok(format!("file://{}", canonical.display()));
    }

    if target.chars().any(char::is_whitespace) {
        return Err(UrlError::Invalid(target.to_string()));
    }

    // STEP 4
    Ok(format!("https://{target}"))
}

/// Cache key for a normalised URL.
///
/// The fragment never changes what the page renders, so `page#a` and
/// `page#b` share one key.
#[must_use]
pub fn cache_key(url: &str) -> String {
    let without_fragment = url.split_once('#').map_or(url, |(base, _)| base);
    without_fragment.to_string()
}
