use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten_fields, result_of};

/// Format output as a two-column table using the tabled crate, followed by
/// any warnings and the methodology line.
pub fn print_table(value: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flatten_fields(result_of(value)) {
        builder.push_record([key, val]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
