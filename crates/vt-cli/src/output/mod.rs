use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `value`, or `rows` when a table was requested.
pub fn output_with_rows<T: Serialize, R: Serialize>(
    value: &T,
    rows: &[R],
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        output(&rows, format)
    } else {
        output(value, format)
    }
}

fn term_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    let width = term_width();
    match value {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers = Vec::<&str>::new();
            for map in items.iter().filter_map(Value::as_object) {
                for key in map.keys() {
                    if !headers.contains(&key.as_str()) {
                        headers.push(key.as_str());
                    }
                }
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                        .collect()
                })
                .collect::<Vec<_>>();
            Ok(table::render_table(&headers, &rows, width))
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            Ok(table::render_table(&["value"], &rows, width))
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, width))
        }
        scalar => Ok(table::render_table(&["value"], &[vec![cell(scalar)]], width)),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
        badges: Vec<&'static str>,
    }

    fn example() -> Example {
        Example {
            id: "x",
            value: 7,
            badges: vec!["Verified Value Gem", "Eco 41%"],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("Verified Value Gem; Eco 41%"));
    }

    #[test]
    fn table_render_for_rows_uses_field_names() {
        let out = render(&vec![example(), example()], OutputFormat::Table).expect("table");
        let header = out.lines().next().unwrap_or_default();
        assert!(header.contains("id"));
        assert!(header.contains("badges"));
        assert_eq!(out.lines().count(), 4);
    }
}
