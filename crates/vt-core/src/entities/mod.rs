//! Entity structs for the ValueTrip option model.
//!
//! Field names follow the provider payloads so a search response deserializes
//! directly. Unknown provider fields land in each struct's `extra` map and are
//! written back unchanged, which keeps the persisted snapshot lossless.

mod option;
mod payload;

pub use option::{
    Cashback, FeeAssistant, HiddenDeal, Prediction, RiskyConnection, SourcePrice, TravelOption,
};
pub use payload::{SearchPayload, SearchSnapshot};

/// Accept provider ids sent as text or as a number.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    use serde::de::Error as _;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}
