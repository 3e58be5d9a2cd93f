//! Helpers for turning a configured service URL into a request endpoint.

/// Strip trailing slashes so a path can be appended without doubling them.
///
/// ```
/// use appspark::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://ai.hackclub.com/"), "https://ai.hackclub.com");
/// assert_eq!(normalize_base_url("http://localhost:8080///"), "http://localhost:8080");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and a path with exactly one slash between them.
///
/// ```
/// use appspark::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://ai.hackclub.com/", "/chat/completions"),
///     "https://ai.hackclub.com/chat/completions"
/// );
/// ```
pub fn construct_api_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        normalize_base_url(base_url),
        path.trim_start_matches('/')
    )
}

/// Whether `url` names an http or https location with a host part.
pub fn is_http_url(url: &str) -> bool {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(rest) if !rest.is_empty() && !rest.starts_with('/'))
}
