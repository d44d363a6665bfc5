use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{deserialize_id, is_false};
use crate::enums::DelayRisk;

/// One provider's quote for an option.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SourcePrice {
    /// Provider name. Empty when the provider did not name itself.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Deep link to the provider's booking page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Fee assistant breakdown: base fare plus per-bag ancillary fees.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeeAssistant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub carry_on_fee: f64,
    #[serde(default)]
    pub checked_fee: f64,
    /// Base price plus the fees for the selected bags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_total: Option<f64>,
}

impl FeeAssistant {
    /// Whether any ancillary fee applies.
    #[must_use]
    pub fn has_bag_fees(&self) -> bool {
        self.carry_on_fee > 0.0 || self.checked_fee > 0.0
    }
}

/// Post-booking cash-back offer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Cashback {
    pub cashback_pct: f64,
    /// Price after cash-back. Never above the nominal price once enriched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective: Option<f64>,
}

/// Deal surfaced by community reports rather than a provider listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HiddenDeal {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Community support rating out of 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Connection risk assessment for itineraries with stops.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RiskyConnection {
    #[serde(default)]
    pub is_risky: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Free-text prediction with a categorical delay risk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Prediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_risk: Option<DelayRisk>,
}

/// One bookable unit: a flight, a hotel stay, a ground transfer, or a
/// flight + hotel bundle (legs in `flight` and `hotel`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TravelOption {
    /// Provider identifier. Numeric ids are kept as their decimal text.
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,

    // Identity and itinerary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    /// Door-to-door travel time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_mins: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    /// Star rating for stays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    // Economics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices_by_source: Vec<SourcePrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheapest_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_assistant: Option<FeeAssistant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashback: Option<Cashback>,
    /// Blended quality signal, 0 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_note: Option<String>,

    // Flags
    #[serde(default, skip_serializing_if = "is_false")]
    pub verified_gem: bool,
    /// Eco score, 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_deal: Option<HiddenDeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risky_connection: Option<RiskyConnection>,
    #[serde(
        default,
        alias = "ai_predictor",
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_prediction: Option<Prediction>,
    /// Free-text timeline of when delay risk builds along the itinerary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_timeline: Option<String>,

    // Attribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gds_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_url: Option<String>,

    // Bundle legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight: Option<Box<TravelOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Box<TravelOption>>,

    /// Provider fields this model does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TravelOption {
    /// Whether this option carries flight and/or hotel legs.
    #[must_use]
    pub const fn is_bundle(&self) -> bool {
        self.flight.is_some() || self.hotel.is_some()
    }

    /// Short human label: carrier, else name, else `Deal`.
    #[must_use]
    pub fn label(&self) -> &str {
        self.carrier
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Deal")
    }

    /// First source quote, if any.
    #[must_use]
    pub fn first_source(&self) -> Option<&SourcePrice> {
        self.prices_by_source.first()
    }

    /// Name of the first source that names itself.
    #[must_use]
    pub fn first_source_name(&self) -> Option<&str> {
        self.prices_by_source
            .iter()
            .map(|source| source.source_name.as_str())
            .find(|name| !name.is_empty())
    }

    /// Travel time as `Xh Ym`, when known.
    #[must_use]
    pub fn duration_label(&self) -> Option<String> {
        self.duration_mins
            .map(|mins| format!("{}h {}m", mins / 60, mins % 60))
    }

    /// Primary deep link: the option's own link, else the first source with one.
    #[must_use]
    pub fn primary_url(&self) -> Option<&str> {
        self.book_url.as_deref().or_else(|| {
            self.prices_by_source
                .iter()
                .find_map(|source| source.url.as_deref())
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_provider_flight() {
        let json = r#"{
            "id": "fl-1",
            "carrier": "BA",
            "origin": "LHR",
            "destination": "JFK",
            "stops": 0,
            "prices_by_source": [
                {"source_name": "Aviasales", "price": 412.5, "url": "https://a.example/1"}
            ],
            "cheapest_price": 412.5,
            "ai_predictor": {"message": "Prices likely to rise", "delay_risk": "low"},
            "baggage_policy": {"cabin": "7kg"}
        }"#;

        let option: TravelOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.carrier.as_deref(), Some("BA"));
        assert_eq!(option.stops, Some(0));
        assert_eq!(
            option.ai_prediction.as_ref().and_then(|p| p.delay_risk),
            Some(DelayRisk::Low)
        );
        assert!(option.extra.contains_key("baggage_policy"));
        assert!(!option.is_bundle());
    }

    #[test]
    fn unknown_fields_survive_roundtrip() {
        let json = r#"{"name": "Hotel Lumen", "amenities": ["wifi", "pool"], "cheapest_price": 90}"#;
        let option: TravelOption = serde_json::from_str(json).unwrap();
        let written = serde_json::to_value(&option).unwrap();
        assert_eq!(written["amenities"], serde_json::json!(["wifi", "pool"]));
        let reread: TravelOption = serde_json::from_value(written).unwrap();
        assert_eq!(reread, option);
    }

    #[test]
    fn label_prefers_carrier_then_name() {
        let mut option = TravelOption {
            name: Some("Hotel Lumen".into()),
            ..Default::default()
        };
        assert_eq!(option.label(), "Hotel Lumen");
        option.carrier = Some("U2".into());
        assert_eq!(option.label(), "U2");
        assert_eq!(TravelOption::default().label(), "Deal");
    }

    #[test]
    fn primary_url_falls_back_to_sources() {
        let option = TravelOption {
            prices_by_source: vec![
                SourcePrice {
                    source_name: "A".into(),
                    price: 10.0,
                    currency: None,
                    url: None,
                },
                SourcePrice {
                    source_name: "B".into(),
                    price: 12.0,
                    currency: None,
                    url: Some("https://b.example".into()),
                },
            ],
            ..Default::default()
        };
        assert_eq!(option.primary_url(), Some("https://b.example"));
    }

    #[rstest::rstest]
    #[case(Some(125), Some("2h 5m"))]
    #[case(Some(45), Some("0h 45m"))]
    #[case(Some(600), Some("10h 0m"))]
    #[case(None, None)]
    fn duration_label_splits_minutes(#[case] mins: Option<u32>, #[case] expected: Option<&str>) {
        let option = TravelOption {
            duration_mins: mins,
            ..Default::default()
        };
        assert_eq!(option.duration_label().as_deref(), expected);
    }

    #[test]
    fn partial_sub_objects_deserialize() {
        let json = r#"{
            "id": 42,
            "prices_by_source": [{"price": 90, "url": "https://a.example/1"}],
            "hidden_deal": {"support_rating": 4},
            "fee_assistant": {"estimated_total": 110},
            "ai_prediction": {"delay_risk": "high"}
        }"#;

        let option: TravelOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.id.as_deref(), Some("42"));
        assert_eq!(option.prices_by_source[0].source_name, "");
        assert_eq!(option.first_source_name(), None);
        let hidden = option.hidden_deal.as_ref().unwrap();
        assert_eq!(hidden.label, "");
        assert_eq!(hidden.support_rating, Some(4.0));
        let fees = option.fee_assistant.as_ref().unwrap();
        assert_eq!(fees.base_price, None);
        assert_eq!(fees.estimated_total, Some(110.0));
        assert_eq!(option.ai_prediction.as_ref().unwrap().message, None);
    }

    #[rstest::rstest]
    #[case(serde_json::json!({"id": "fl-1"}), Some("fl-1"))]
    #[case(serde_json::json!({"id": 42}), Some("42"))]
    #[case(serde_json::json!({"id": null}), None)]
    #[case(serde_json::json!({}), None)]
    fn id_accepts_text_or_number(#[case] json: Value, #[case] expected: Option<&str>) {
        let option: TravelOption = serde_json::from_value(json).unwrap();
        assert_eq!(option.id.as_deref(), expected);
    }

    #[test]
    fn id_rejects_other_shapes() {
        let error = serde_json::from_str::<TravelOption>(r#"{"id": [1]}"#).unwrap_err();
        assert!(error.to_string().contains("string or number"), "{error}");
    }

    #[test]
    fn numeric_id_writes_back_as_text() {
        let option: TravelOption = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(serde_json::to_value(&option).unwrap()["id"], "7");
    }
}
