//
//  logfire-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty-printed JSON for `--json` output. Field order follows the
//! order of the source document (`serde_json` is built with
//! `preserve_order`), so a dashboard printed with `get --json` keeps the
//! layout the server returned.

use serde::Serialize;
use std::io::Write;

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes a value as pretty-printed JSON followed by a newline.
///
/// # Example
///
/// ```rust
/// use logfire_cli::output::write_json_to;
///
/// let mut buf = Vec::new();
/// write_json_to(&mut buf, &serde_json::json!({"slug": "overview"})).unwrap();
/// assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"slug\": \"overview\"\n}\n");
/// ```
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_field_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let mut buf = Vec::new();
        write_json_to(&mut buf, &value).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let zeta = out.find("zeta").unwrap();
        let alpha = out.find("alpha").unwrap();
        let mid = out.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_list_output() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &["a", "b"][..]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[\n  \"a\",\n  \"b\"\n]\n");
    }
}
