//! Common helpers shared across FMP tools.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Default number of statements/periods to request.
pub fn default_limit() -> u32 {
    4
}

/// Default reporting period for income statements.
pub fn default_period() -> String {
    "annual".to_string()
}

/// Wrap an upstream payload as a tool result.
///
/// Soft errors (`{"error": ...}`) travel as normal data - the caller branches
/// on the `error` key, so the result is never marked as a protocol-level
/// error.
pub fn json_result(payload: Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(payload.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_defaults() {
        assert_eq!(default_limit(), 4);
        assert_eq!(default_period(), "annual");
    }

    #[test]
    fn test_soft_error_is_not_a_protocol_error() {
        let result = json_result(serde_json::json!({ "error": "boom" }));
        assert!(!result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("boom"));
        } else {
            panic!("expected text content");
        }
    }
}
