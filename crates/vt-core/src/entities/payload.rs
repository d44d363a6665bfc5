use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TravelOption;
use crate::enums::SearchType;

fn default_currency() -> String {
    String::from("GBP")
}

/// Result set returned by the external search collaborator.
///
/// Single-leg and lodging searches return `options`; flight + hotel searches
/// return `deals`. Whichever key arrived is the one written back.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<TravelOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deals: Option<Vec<TravelOption>>,
    /// ISO currency code all prices are quoted in.
    #[serde(default = "default_currency")]
    pub currency: String,
    pub search_type: SearchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_hybrid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_eco: Option<bool>,
    /// Whether prices came from live provider calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources_returned_names: Vec<String>,
    /// When the provider last verified its prices, usually RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_freshness: Option<String>,
    /// Provider notice shown above the results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Flight-only results sent alongside bundle deals for comparison.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flight_options: Vec<TravelOption>,
    /// Hotel-only results sent alongside bundle deals for comparison.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hotel_options: Vec<TravelOption>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchPayload {
    /// An empty single-list payload.
    #[must_use]
    pub fn new(search_type: SearchType, currency: impl Into<String>) -> Self {
        Self {
            options: None,
            deals: None,
            currency: currency.into(),
            search_type,
            eco_hybrid: None,
            include_eco: None,
            live: None,
            nights: None,
            sources_returned_names: Vec::new(),
            search_freshness: None,
            message: None,
            flight_options: Vec::new(),
            hotel_options: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Builder-style helper that stores `results` under the key matching the search type.
    #[must_use]
    pub fn with_results(mut self, results: Vec<TravelOption>) -> Self {
        if self.search_type.is_bundle() {
            self.deals = Some(results);
        } else {
            self.options = Some(results);
        }
        self
    }

    /// The ranked result list: `options`, else `deals`, else nothing.
    #[must_use]
    pub fn results(&self) -> &[TravelOption] {
        self.options
            .as_deref()
            .or(self.deals.as_deref())
            .unwrap_or(&[])
    }

    /// Mutable access to whichever list [`results`](Self::results) reads.
    pub fn results_mut(&mut self) -> Option<&mut Vec<TravelOption>> {
        if self.options.is_some() {
            self.options.as_mut()
        } else {
            self.deals.as_mut()
        }
    }

    /// Eco-service hybrid flag as sent by the provider (`eco_hybrid`, else `include_eco`).
    #[must_use]
    pub fn eco_mode(&self) -> Option<bool> {
        self.eco_hybrid.or(self.include_eco)
    }

    /// `search_freshness` as a UTC timestamp, when it parses as RFC 3339.
    #[must_use]
    pub fn verified_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.search_freshness.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }
}

/// The latest successful search, as persisted by the offline vault.
///
/// Wire shape: `{"data": {...}, "capturedAtEpochMillis": 1700000000000}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchSnapshot {
    pub data: SearchPayload,
    #[serde(rename = "capturedAtEpochMillis", alias = "ts")]
    pub captured_at_epoch_millis: i64,
}

impl SearchSnapshot {
    #[must_use]
    pub const fn new(data: SearchPayload, captured_at_epoch_millis: i64) -> Self {
        Self {
            data,
            captured_at_epoch_millis,
        }
    }

    /// Capture time as a UTC timestamp, if the stored millis are in range.
    #[must_use]
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.captured_at_epoch_millis)
    }
}
