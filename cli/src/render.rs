//! Table and JSON rendering for command output.

use serde_json::Value;

/// Render rows as a fixed-width table with a header line.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    render_row(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)),
        &widths,
    );
    for row in rows {
        render_row(&mut out, row.iter().cloned(), &widths);
    }

    out
}

fn render_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let cells: Vec<String> = cells.collect();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // No trailing padding on the last column.
        if i + 1 < cells.len() {
            for _ in cell.len()..widths[i] {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

/// Stringify one cell of a JSON object for table display.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Print a list of objects: a table of the given columns, or raw JSON.
pub fn print_list(items: &[Value], columns: &[&str], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&Value::Array(items.to_vec()))
                .expect("list of values must serialize")
        );
        return;
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| columns.iter().map(|c| cell(item.get(*c))).collect())
        .collect();
    print!("{}", table(columns, &rows));
}

/// Print one object: a two-column key/value table, or raw JSON.
pub fn print_object(value: &Value, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).expect("value must serialize")
        );
        return;
    }

    let rows: Vec<Vec<String>> = match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| vec![k.clone(), cell(Some(v))])
            .collect(),
        other => vec![vec!["value".to_string(), cell(Some(other))]],
    };
    print!("{}", table(&["field", "value"], &rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_table_pads_columns() {
        let out = table(
            &["MeetingId", "MediaRegion"],
            &[
                vec!["m1".to_string(), "us-east-1".to_string()],
                vec!["meeting-long-id".to_string(), "eu-west-1".to_string()],
            ],
        );

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "MeetingId        MediaRegion");
        assert_eq!(lines[1], "---------------  -----------");
        assert_eq!(lines[2], "m1               us-east-1");
        assert_eq!(lines[3], "meeting-long-id  eu-west-1");
    }

    #[test]
    fn test_cell_formats() {
        assert_eq!(cell(None), "-");
        assert_eq!(cell(Some(&json!(null))), "-");
        assert_eq!(cell(Some(&json!("text"))), "text");
        assert_eq!(cell(Some(&json!(42))), "42");
        assert_eq!(cell(Some(&json!({"a": 1}))), r#"{"a":1}"#);
    }
}
