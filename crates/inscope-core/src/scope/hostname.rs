//! Hostname extraction for URL-shaped input
//!
//! Matching a URL against domain patterns would let the path or query
//! string produce false hits, so URLs are reduced to their host first.
//! The host is taken verbatim from the input so that a URL and its bare
//! host classify the same way under case-sensitive or non-ASCII patterns.

use crate::error::{Error, Result};
use std::ops::Range;
use url::{ParseError, Url};

/// Shortest input that can carry the `https:` prefix
const MIN_URL_LEN: usize = 6;

/// Check whether input looks like an HTTP or HTTPS URL
///
/// Case-insensitive literal prefix test on the trimmed input; no parsing.
pub fn is_url(input: &str) -> bool {
    let s = input.trim().to_lowercase();

    if s.len() < MIN_URL_LEN {
        return false;
    }

    s.starts_with("http:") || s.starts_with("https:")
}

/// Extract the hostname of a URL
///
/// Scheme, port, userinfo, path, query and fragment are dropped and IPv6
/// literals lose their brackets. The host keeps its original spelling (no
/// case folding or punycode). A URL without an authority yields an empty
/// string. Any all-digit port is accepted, whatever its value.
pub fn extract_hostname(input: &str) -> Result<String> {
    let fail = |e: ParseError| Error::url_parse(input, e);

    let Some(authority) = authority_range(input) else {
        return Ok(String::new());
    };

    let host_start = input[authority.clone()]
        .rfind('@')
        .map_or(authority.start, |i| authority.start + i + 1);
    let hostport = &input[host_start..authority.end];

    let (host, port_start) = if let Some(bracketed) = hostport.strip_prefix('[') {
        let close = bracketed.find(']').ok_or_else(|| fail(ParseError::InvalidIpv6Address))?;
        let after = &bracketed[close + 1..];
        if !after.is_empty() && !after.starts_with(':') {
            return Err(fail(ParseError::InvalidIpv6Address));
        }
        (&bracketed[..close], host_start + close + 2)
    } else {
        match hostport.rfind(':') {
            Some(i) => (&hostport[..i], host_start + i),
            None => (hostport, authority.end),
        }
    };

    let port = &input[port_start..authority.end];
    if !port.is_empty() && !port[1..].bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail(ParseError::InvalidPort));
    }

    if host.is_empty() {
        return Ok(String::new());
    }

    // Validate the rest of the URL without the port; the url crate caps
    // ports at 65535.
    let without_port = format!("{}{}", &input[..port_start], &input[authority.end..]);
    Url::parse(&without_port).map_err(fail)?;

    Ok(host.to_string())
}

/// Byte range of the authority (`//userinfo@host:port`) without the slashes
fn authority_range(input: &str) -> Option<Range<usize>> {
    let after_scheme = input.find(':')? + 1;
    if !input[after_scheme..].starts_with("//") {
        return None;
    }

    let start = after_scheme + 2;
    let end = input[start..]
        .find(['/', '?', '#'])
        .map_or(input.len(), |i| start + i);
    Some(start..end)
}
