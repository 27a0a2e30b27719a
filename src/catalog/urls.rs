//! Media URL assembly under the configured prefix.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;
use url::Url;

use super::errors::CatalogError;

/// Parse a prefix URL and make sure path segments can be appended to it
pub fn parse_prefix(raw: &str) -> Result<Url, CatalogError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CatalogError::Config(format!("Invalid prefix URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(CatalogError::Config(format!(
            "Prefix URL cannot be a base: {}",
            raw
        )));
    }
    Ok(url)
}

/// Characters left as-is in a path component; everything else is escaped
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Undo pre-encoding of a feed source URL.
///
/// Only strings containing `%` are treated as encoded; they are form-decoded
/// (`+` is a space) as UTF-8, with invalid sequences replaced by U+FFFD.
/// Anything else is returned untouched.
pub fn decode_source_url(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }

    let spaced = raw.replace('+', " ");
    Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

/// Append `segments` to the prefix path, percent-encoding each as a path component.
///
/// A trailing slash on the prefix does not produce an empty segment.
pub fn append_segments(prefix: &Url, segments: &[&str]) -> Result<Url, CatalogError> {
    if prefix.cannot_be_a_base() {
        return Err(CatalogError::Config(format!(
            "Prefix URL cannot be a base: {}",
            prefix
        )));
    }

    let mut path = prefix.path().to_string();
    for segment in segments {
        if !path.ends_with('/') {
            path.push('/');
        }
        path.extend(utf8_percent_encode(segment, PATH_COMPONENT));
    }

    let mut url = prefix.clone();
    url.set_path(&path);
    Ok(url)
}

/// prefix / category / source
pub fn video_url(prefix: &Url, category: &str, source: &str) -> Result<String, CatalogError> {
    append_segments(prefix, &[category, source]).map(String::from)
}

/// prefix / category / title / image
pub fn image_url(
    prefix: &Url,
    category: &str,
    title: &str,
    image: &str,
) -> Result<String, CatalogError> {
    append_segments(prefix, &[category, title, image]).map(String::from)
}
