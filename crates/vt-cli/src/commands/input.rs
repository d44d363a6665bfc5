use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use vt_core::SearchPayload;

/// Read a search payload from a file, or stdin when `source` is `-`.
pub fn read_payload(source: &str, default_currency: &str) -> anyhow::Result<SearchPayload> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("failed to read payload file {source}"))?
    };
    parse_payload(&raw, default_currency)
}

/// Parse payload JSON, filling in `default_currency` when the payload has none.
pub fn parse_payload(raw: &str, default_currency: &str) -> anyhow::Result<SearchPayload> {
    let mut value: Value = serde_json::from_str(raw).context("payload is not valid JSON")?;
    if let Some(map) = value.as_object_mut() {
        map.entry("currency")
            .or_insert_with(|| Value::String(default_currency.to_string()));
    }
    serde_json::from_value(value).context("payload is not a search result set")
}
