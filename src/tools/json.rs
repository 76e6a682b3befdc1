//! JSON formatter
//!
//! Pretty-print or minify a JSON document.

use crate::error::{ToolboxError, ToolboxResult};

/// Output style for [`format_json`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Indented, human-readable
    #[default]
    Pretty,
    /// Single line, no insignificant whitespace
    Minified,
}

/// Reformat a JSON document.
///
/// # Errors
///
/// Returns [`ToolboxError::InvalidInput`] when the input is not valid JSON.
pub fn format_json(input: &str, style: JsonStyle) -> ToolboxResult<String> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| ToolboxError::InvalidInput(format!("not valid JSON: {}", e)))?;

    let formatted = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&value)?,
        JsonStyle::Minified => serde_json::to_string(&value)?,
    };

    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_prints() {
        let out = format_json(r#"{"a":1,"b":[true,null]}"#, JsonStyle::Pretty).unwrap();
        assert!(out.contains("\n"));
        assert!(out.contains("\"a\": 1"));
    }

    #[test]
    fn test_minifies() {
        let out = format_json("{\n  \"a\": 1\n}", JsonStyle::Minified).unwrap();
        assert_eq!(out, r#"{"a":1}"#);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = format_json("{not json", JsonStyle::Pretty).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
