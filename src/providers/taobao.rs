use log::{debug, trace};
use serde::Deserialize;

use crate::{record::null_as_default, LocationRecord, LookupError};

/// URL prefix of the public ip.taobao.com lookup API. The queried IP is appended as is.
pub const DEFAULT_ENDPOINT: &str = "http://ip.taobao.com/service/getIpInfo.php?ip=";

const SERVICE_UNAVAILABLE_PATTERN: &[u8] = b"503 Service Temporarily Unavailable";
const BAD_GATEWAY_PATTERN: &[u8] = b"502 Bad Gateway";

const CODE_SUCCESS: i64 = 0;
const CODE_INVALID_IP: i64 = 1;

#[derive(Debug, Clone)]
pub struct TaobaoProvider {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ResponseStatus {
    // Missing or null reads as 0
    #[serde(default, deserialize_with = "null_as_default")]
    code: i64,
}

#[derive(Debug, Deserialize)]
struct SuccessPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    data: LocationRecord,
}

#[derive(Debug, Deserialize)]
struct FailurePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    data: String,
}

impl TaobaoProvider {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Uses a preconfigured HTTP client, e.g. one carrying a request timeout. No timeout is
    /// applied otherwise.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queries the upstream for `ip`. Exactly one GET is issued for non-empty input, and none for
    /// empty input.
    pub async fn lookup(&self, ip: &str) -> Result<LocationRecord, LookupError> {
        if ip.is_empty() {
            return Err(LookupError::NoInput);
        }

        // The IP is not percent-encoded. Upstream validates it and answers with code 1 if needed.
        let url = format!("{}{}", self.endpoint, ip);
        debug!("Querying {}", url);

        // The status line is ignored: outage pages arrive as 5xx and are recognized by content
        let body = self.client.get(&url).send().await?.bytes().await?;
        trace!("Received {} bytes for {}", body.len(), ip);

        let result = classify(&body);
        match &result {
            Ok(record) => debug!("Lookup for {} succeeded: {}", ip, record),
            Err(err) => debug!("Lookup for {} failed: {}", ip, err),
        }

        result
    }
}

impl Default for TaobaoProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a raw response body into a location record or one of the lookup errors.
///
/// Outage pages are HTML, so they are detected before any JSON decoding. The 503 page wins over
/// the 502 page when both patterns are present.
pub fn classify(body: &[u8]) -> Result<LocationRecord, LookupError> {
    if body.is_empty() {
        return Err(LookupError::NoData);
    }
    if contains(body, SERVICE_UNAVAILABLE_PATTERN) {
        return Err(LookupError::ServiceUnavailable);
    }
    if contains(body, BAD_GATEWAY_PATTERN) {
        return Err(LookupError::BadGateway);
    }

    let status: ResponseStatus = serde_json::from_slice(body)?;
    match status.code {
        CODE_SUCCESS => {
            let payload: SuccessPayload = serde_json::from_slice(body)?;
            if payload.data.is_private() {
                return Err(LookupError::PrivateIp);
            }

            Ok(payload.data)
        }
        CODE_INVALID_IP => {
            let payload: FailurePayload = serde_json::from_slice(body)?;
            trace!("Upstream rejected IP: {}", payload.data);

            Err(LookupError::InvalidIp)
        }
        code => Err(LookupError::Unknown(code)),
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}
