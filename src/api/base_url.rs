//! Base URL selection for the quote API

use crate::api::error::ApiResult;
use url::Url;

/// API address used while developing against a local service
pub const LOCAL_DEV_API: &str = "http://localhost:8000";

/// Port of the local static page server that fronts the development API
const LOCAL_DEV_PAGE_PORT: u16 = 8080;

/// Pick the API base URL for a client running at `origin`
///
/// A `file:` origin or the local page server on `localhost:8080` talk to the
/// development API; any other origin talks to itself (scheme, host and port,
/// without path or query).
pub fn resolve_base_url(origin: &Url) -> ApiResult<Url> {
    if origin.scheme() == "file" {
        return Ok(Url::parse(LOCAL_DEV_API)?);
    }

    let Some(host) = origin.host_str() else {
        tracing::warn!("Origin {} has no host, using {}", origin, LOCAL_DEV_API);
        return Ok(Url::parse(LOCAL_DEV_API)?);
    };

    if host == "localhost" && origin.port() == Some(LOCAL_DEV_PAGE_PORT) {
        return Ok(Url::parse(LOCAL_DEV_API)?);
    }

    let mut base = format!("{}://{}", origin.scheme(), host);
    if let Some(port) = origin.port() {
        base.push_str(&format!(":{}", port));
    }
    Ok(Url::parse(&base)?)
}
