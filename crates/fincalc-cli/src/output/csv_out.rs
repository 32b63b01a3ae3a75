use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// When the result carries a single table-shaped field (a schedule or a
/// year-by-year projection) that table becomes the CSV body; otherwise
/// the scalar fields are written as field,value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);
            if let Value::Object(res_map) = result {
                let tables: Vec<&Vec<Value>> = res_map
                    .values()
                    .filter_map(|v| match v {
                        Value::Array(arr) if arr.first().map(Value::is_object).unwrap_or(false) => {
                            Some(arr)
                        }
                        _ => None,
                    })
                    .collect();

                if tables.len() == 1 {
                    write_record_csv(&mut wtr, tables[0]);
                } else {
                    let _ = wtr.write_record(["field", "value"]);
                    for (key, val) in res_map {
                        if !matches!(val, Value::Array(_)) {
                            let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                        }
                    }
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => write_record_csv(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_record_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
