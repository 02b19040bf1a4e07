use std::fmt;

use serde::{Deserialize, Deserializer};

/// Country text the upstream reports for private and unassigned ranges ("unassigned or internal
/// network IP").
pub const PRIVATE_COUNTRY: &str = "未分配或者内网IP";

/// Location data returned for one successful lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub county: String,
    #[serde(deserialize_with = "null_as_default")]
    pub county_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isp_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
}

/// Reads `null` as the type's default value. Absent fields are covered by `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LocationRecord {
    pub fn is_private(&self) -> bool {
        // Matched on content only. If the upstream rewords this text, private ranges come back as
        // regular records.
        self.country == PRIVATE_COUNTRY
    }
}

impl fmt::Display for LocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.ip, self.country, self.region, self.city, self.isp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_summary_fields() {
        let record = LocationRecord {
            country: "中国".into(),
            region: "广东省".into(),
            city: "深圳市".into(),
            isp: "电信".into(),
            ip: "202.104.103.41".into(),
            ..Default::default()
        };

        assert_eq!(record.to_string(), "202.104.103.41 中国 广东省 深圳市 电信");
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let record: LocationRecord =
            serde_json::from_str(r#"{"country":"美国","ip":"8.8.8.8"}"#).unwrap();

        assert_eq!(record.country, "美国");
        assert_eq!(record.ip, "8.8.8.8");
        assert!(record.city.is_empty());
        assert!(!record.is_private());
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let record: LocationRecord =
            serde_json::from_str(r#"{"country":"美国","county":null,"ip":"8.8.8.8"}"#).unwrap();

        assert_eq!(record.country, "美国");
        assert!(record.county.is_empty());
    }

    #[test]
    fn non_text_field_is_rejected() {
        assert!(serde_json::from_str::<LocationRecord>(r#"{"country":1}"#).is_err());
    }
}
