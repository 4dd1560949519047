use std::io::Write;

use serde_json::Value;

use crate::error::CliError;

/// Writes `data` to stdout as a single JSON document.
pub fn render(data: &Value, pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, data, pretty)?;
    handle.flush()?;
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, data: &Value, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, data)?;
    } else {
        serde_json::to_writer(&mut *writer, data)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_output_is_one_line() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &serde_json::json!({ "orderNo": "1" }), false)
            .expect("must write");
        assert_eq!(String::from_utf8(buffer).expect("utf8"), "{\"orderNo\":\"1\"}\n");
    }

    #[test]
    fn pretty_output_is_indented() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &serde_json::json!({ "a": 1 }), true).expect("must write");
        assert_eq!(String::from_utf8(buffer).expect("utf8"), "{\n  \"a\": 1\n}\n");
    }
}
