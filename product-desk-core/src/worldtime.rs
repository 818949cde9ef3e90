use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of the timezone service's response. Every field is optional:
/// the service's error bodies are flat JSON too, and the page only ever
/// reads one field before discarding the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimezoneRecord {
    pub utc_offset: Option<String>,
    pub timezone: Option<String>,
    pub day_of_week: Option<u32>,
    pub day_of_year: Option<u32>,
    pub datetime: Option<DateTime<FixedOffset>>,
    pub utc_datetime: Option<DateTime<FixedOffset>>,
    pub unixtime: Option<i64>,
    pub raw_offset: Option<i32>,
    pub week_number: Option<u32>,
    pub dst: Option<bool>,
    pub abbreviation: Option<String>,
    pub dst_offset: Option<i32>,
    pub dst_from: Option<DateTime<FixedOffset>>,
    pub dst_until: Option<DateTime<FixedOffset>>,
    pub client_ip: Option<String>,
}

/// One-shot client for the timezone lookup endpoint. No retry, no timeout
/// override, no status gate - transport and parse failures propagate to the
/// caller, and the record is fetched fresh on every call.
#[derive(Debug, Clone)]
pub struct WorldTimeClient {
    client: Client,
    url: String,
}

impl WorldTimeClient {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_timezone(&self) -> Result<TimezoneRecord, reqwest::Error> {
        debug!("🌍 Fetching timezone: {}", self.url);

        let record = self
            .client
            .get(&self.url)
            .header("Cache-Control", "no-store")
            .send()
            .await?
            .json::<TimezoneRecord>()
            .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_service_response() {
        let body = r#"{
            "abbreviation": "PDT",
            "client_ip": "203.0.113.7",
            "datetime": "2024-09-22T07:09:30.618123-07:00",
            "day_of_week": 0,
            "day_of_year": 266,
            "dst": true,
            "dst_from": "2024-03-10T10:00:00+00:00",
            "dst_offset": 3600,
            "dst_until": "2024-11-03T09:00:00+00:00",
            "raw_offset": -28800,
            "timezone": "America/Vancouver",
            "unixtime": 1727014170,
            "utc_datetime": "2024-09-22T14:09:30.618123+00:00",
            "utc_offset": "-07:00",
            "week_number": 38
        }"#;

        let record: TimezoneRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.timezone.as_deref(), Some("America/Vancouver"));
        assert_eq!(record.abbreviation.as_deref(), Some("PDT"));
        assert_eq!(record.unixtime, Some(1727014170));
        assert_eq!(record.dst, Some(true));

        let datetime = record.datetime.unwrap();
        assert_eq!(datetime.timezone().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn test_error_bodies_parse_to_empty_record() {
        // The service answers lookups for unknown zones with a flat JSON
        // error object; every field lands as None.
        let record: TimezoneRecord =
            serde_json::from_str(r#"{"error": "unknown location"}"#).unwrap();
        assert!(record.timezone.is_none());
        assert!(record.datetime.is_none());
    }
}
