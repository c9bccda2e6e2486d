//! `data:` URI helpers for embedding rendered SVG directly in HTML or PDF.
//!
//! Rust strings are already UTF-8, so the base64 form encodes the UTF-8 bytes of
//! the document and Devanagari text survives intact.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;

const BASE64_PREFIX: &str = "data:image/svg+xml;base64,";
const UTF8_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

// Keep common SVG punctuation readable. Everything else is escaped, including
// non-ASCII, spaces and parentheses, so the URL also works unquoted in CSS `url()`.
const SVG_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'=')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b',');

#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("not an SVG data URL")]
    UnsupportedPrefix,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("percent-encoded payload is not valid UTF-8: {0}")]
    PercentUtf8(#[from] std::str::Utf8Error),
}

/// `data:image/svg+xml;base64,...` over the UTF-8 bytes of `svg`.
pub fn to_data_url(svg: &str) -> String {
    let mut out = String::with_capacity(BASE64_PREFIX.len() + svg.len() * 4 / 3 + 4);
    out.push_str(BASE64_PREFIX);
    STANDARD.encode_string(svg.as_bytes(), &mut out);
    out
}

/// Percent-encoded variant, usually shorter than base64 for ASCII-heavy markup.
pub fn to_data_url_percent(svg: &str) -> String {
    format!("{UTF8_PREFIX}{}", utf8_percent_encode(svg, SVG_SAFE))
}

/// Decode either form produced by this module back into the SVG text.
pub fn decode_data_url(url: &str) -> Result<String, DataUrlError> {
    if let Some(payload) = url.strip_prefix(BASE64_PREFIX) {
        let bytes = STANDARD.decode(payload)?;
        Ok(String::from_utf8(bytes)?)
    } else if let Some(payload) = url.strip_prefix(UTF8_PREFIX) {
        Ok(percent_decode_str(payload).decode_utf8()?.into_owned())
    } else {
        Err(DataUrlError::UnsupportedPrefix)
    }
}
