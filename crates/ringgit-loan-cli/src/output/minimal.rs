use serde_json::Value;

use super::{result_of, scalar_text};

/// Print just the key answer from the output.
///
/// For loan quotes that is the formatted monthly payment; otherwise the
/// first field of the result.
pub fn print_minimal(value: &Value) {
    let result_obj = result_of(value);

    let priority_keys = ["monthly_payment", "display"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar_text(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_text(val));
            return;
        }
    }

    println!("{}", scalar_text(result_obj));
}
