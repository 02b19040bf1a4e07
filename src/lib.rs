//! Client for the ip.taobao.com IP geolocation API.
//!
//! A lookup issues one HTTP GET and sorts the response into a [`LocationRecord`] or a
//! [`LookupError`]: gateway outage pages, invalid IPs, private or unassigned ranges and unknown
//! status codes are all reported as distinct errors.

mod error;
pub use error::{ErrorKind, LookupError};

mod record;
pub use record::{LocationRecord, PRIVATE_COUNTRY};

pub mod providers;
pub use providers::TaobaoProvider;

/// Looks up `ip` against the default endpoint with a default HTTP client.
pub async fn lookup(ip: &str) -> Result<LocationRecord, LookupError> {
    TaobaoProvider::new().lookup(ip).await
}
