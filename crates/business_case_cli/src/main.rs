use std::io::{Read, Write};

use business_case::extract;
use serde_json::json;

/// Reads a raw completion reply on stdin and prints the extracted response JSON.
fn main() {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        std::process::exit(2);
    }

    let resp = match extract(&input) {
        Ok(resp) => resp,
        Err(e) => {
            let detail = json!({
                "detail": format!("Failed to parse structured data from response: {e}")
            });
            let _ = writeln!(std::io::stderr(), "{detail}");
            std::process::exit(2);
        }
    };

    let out = serde_json::to_string(&resp)
        .unwrap_or_else(|_| "{\"detail\":\"encode error\"}".to_string());
    let _ = std::io::stdout().write_all(out.as_bytes());
}
