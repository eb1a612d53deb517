use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_table(serde_json::to_value(value)?)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print plain text (robots.txt, sitemap XML) unchanged in every format
/// except JSON, which wraps it in a string.
pub fn output_text(text: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => output(&text, format),
        OutputFormat::Raw | OutputFormat::Table => {
            println!("{text}");
            Ok(())
        }
    }
}

fn render_table(value: Value) -> String {
    let width = table::terminal_width();
    match value {
        // A response wrapping a single list renders the list itself.
        Value::Object(map) if map.len() == 1 && map.values().all(Value::is_array) => {
            match map.into_iter().next() {
                Some((_, Value::Array(items))) => render_rows(&items, width),
                _ => String::from("(no rows)"),
            }
        }
        Value::Object(map) => render_key_value(map, width),
        Value::Array(items) => render_rows(&items, width),
        scalar => cell(&scalar),
    }
}

fn render_key_value(map: Map<String, Value>, width: Option<usize>) -> String {
    let rows = map
        .into_iter()
        .map(|(key, value)| vec![key, cell(&value)])
        .collect::<Vec<_>>();
    table::render(&["field", "value"], &rows, width)
}

fn render_rows(items: &[Value], width: Option<usize>) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    // Column order follows the first record; later keys are appended.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render(&["value"], &rows, width);
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect::<Vec<_>>();
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render(&header_refs, &rows, width)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.replace('\n', " "),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[test]
    fn raw_is_single_line_json() {
        let rendered = render(&json!({"slug": "autism", "order": 2}), OutputFormat::Raw).unwrap();
        assert_eq!(rendered, r#"{"order":2,"slug":"autism"}"#);
    }

    #[test]
    fn table_unwraps_single_list_response() {
        let value = json!({"images": [
            {"id": "img-1", "title": "Sensory room", "visible": true},
            {"id": "img-2", "title": "Play area", "visible": false},
        ]});
        let rendered = render(&value, OutputFormat::Table).unwrap();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[2].contains("Sensory room"));
    }

    #[test]
    fn table_renders_empty_list() {
        let rendered = render(&json!({"messages": []}), OutputFormat::Table).unwrap();
        assert_eq!(rendered, "(no rows)");
    }

    #[test]
    fn table_renders_record_as_fields() {
        let rendered = render(&json!({"gallery": 3, "messages": 0}), OutputFormat::Table).unwrap();
        assert!(rendered.contains("gallery"));
        assert_eq!(rendered.lines().count(), 4);
    }
}
