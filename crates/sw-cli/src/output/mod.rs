use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print titled tables, one per section. Used for table output of
/// composite results.
pub fn output_sections(sections: &[(&str, Value)]) -> anyhow::Result<()> {
    let mut blocks = Vec::with_capacity(sections.len());
    for (title, value) in sections {
        blocks.push(format!("{title}\n{}", render_table(value)?));
    }
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["field", "value"], &rows, options()))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options(),
        )),
    }
}

/// One column per key seen in any row, sorted by name.
fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(none)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v
            .as_f64()
            .filter(|_| v.is_f64())
            .map_or_else(|| v.to_string(), |f| format!("{f:.2}")),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(|i| !i.is_object() && !i.is_array()) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        url: &'static str,
        clicks: u64,
        change_pct: Option<f64>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            url: "/a",
            clicks: 7,
            change_pct: Some(-20.0),
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["url"], "/a");
        assert_eq!(parsed["clicks"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&json!({"a": [1, 2]}), OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_has_one_column_per_field() {
        let rows = vec![
            Row {
                url: "/a",
                clicks: 7,
                change_pct: Some(-20.0),
            },
            Row {
                url: "/b",
                clicks: 3,
                change_pct: None,
            },
        ];
        let out = render(&rows, OutputFormat::Table).unwrap();
        let header = out.lines().next().unwrap();
        let columns: Vec<&str> = header.split_whitespace().collect();
        assert_eq!(columns, vec!["change_pct", "clicks", "url"]);
        assert!(out.contains("-20.00"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn cells_flatten_scalar_lists() {
        assert_eq!(value_to_cell(&json!([2024, 2025])), "2024, 2025");
        assert_eq!(value_to_cell(&json!(null)), "-");
        assert_eq!(value_to_cell(&json!(12)), "12");
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let empty: Vec<Row> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Table).unwrap(), "(none)");
    }
}
