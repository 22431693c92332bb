use serde_json::Value;
use std::io;

use super::{flatten_fields, result_of};

/// Write the result as two-column CSV (field, value) to stdout. Nested
/// objects become dotted field names; warnings follow as `warning` rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in flatten_fields(result_of(value)) {
        let _ = wtr.write_record([key.as_str(), val.as_str()]);
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        for w in warnings.iter().filter_map(Value::as_str) {
            let _ = wtr.write_record(["warning", w]);
        }
    }

    let _ = wtr.flush();
}
