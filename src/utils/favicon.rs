use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

/// Favicon-by-domain service endpoint.
const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

// Characters that would corrupt the service query string. Ordinary hosts
// ('.', ':', alphanumerics) pass through verbatim.
const HOST_ENCODE_SET: &AsciiSet =
    &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>').add(b'&').add(b'=').add(b'?');

/// Derives a favicon-service URL for a resource URL, or `None` when no host
/// can be extracted.
///
/// Strict URL parsing is tried first; when that fails, a permissive scan
/// pulls the host out of the first `http(s)://` prefix found anywhere in
/// the string. Callers must tolerate `None`: a resource without a
/// derivable host simply renders without an icon.
///
/// # Examples
///
/// ```
/// use devdash::favicon_url;
///
/// assert_eq!(
///     favicon_url("https://example.com/path"),
///     Some("https://www.google.com/s2/favicons?domain=example.com&sz=64".to_string())
/// );
/// assert_eq!(favicon_url("not a url"), None);
/// ```
pub fn favicon_url(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    if let Ok(parsed) = Url::parse(url)
        && let Some(host) = parsed.host_str()
    {
        return Some(service_url(host));
    }

    extract_host_loose(url).map(service_url)
}

fn service_url(host: &str) -> String {
    let encoded = utf8_percent_encode(host, HOST_ENCODE_SET);
    format!("{FAVICON_SERVICE}?domain={encoded}&sz=64")
}

/// Finds the first `http(s)://` occurrence with a non-empty host: everything
/// after the scheme up to the next `/`. Case-sensitive, like the strict
/// parser is not.
fn extract_host_loose(url: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(offset) = url[search_from..].find("http") {
        let idx = search_from + offset;
        let rest = &url[idx..];

        if let Some(after) = rest.strip_prefix("https://").or_else(|| rest.strip_prefix("http://"))
        {
            let host = after.split('/').next().unwrap_or("");
            if !host.is_empty() {
                return Some(host);
            }
        }

        search_from = idx + "http".len();
    }
    None
}
