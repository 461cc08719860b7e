//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The authoritative list of tool names (populated once at startup,
//!   read-only afterward)
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::fmp::FmpClient;
use super::definitions::{
    GetBalanceSheetsTool, GetCashFlowStatementsTool, GetCompanyProfileTool,
    GetEnterpriseValueTool, GetIncomeStatementsTool, GetRatiosTool, SearchCompaniesByNameTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// The key set of this registry is exactly the set of externally invokable
/// operation names; every name is unique and stable for the process lifetime.
pub struct ToolRegistry {
    client: Arc<FmpClient>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the shared FMP client.
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetIncomeStatementsTool::NAME,
            GetBalanceSheetsTool::NAME,
            GetCashFlowStatementsTool::NAME,
            GetCompanyProfileTool::NAME,
            GetRatiosTool::NAME,
            GetEnterpriseValueTool::NAME,
            SearchCompaniesByNameTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools; both the
    /// STDIO and HTTP transports derive their listings from it.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetIncomeStatementsTool::to_tool(),
            GetBalanceSheetsTool::to_tool(),
            GetCashFlowStatementsTool::to_tool(),
            GetCompanyProfileTool::to_tool(),
            GetRatiosTool::to_tool(),
            GetEnterpriseValueTool::to_tool(),
            SearchCompaniesByNameTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let client = self.client.clone();
        match name {
            GetIncomeStatementsTool::NAME => {
                GetIncomeStatementsTool::http_handler(arguments, client).await
            }
            GetBalanceSheetsTool::NAME => {
                GetBalanceSheetsTool::http_handler(arguments, client).await
            }
            GetCashFlowStatementsTool::NAME => {
                GetCashFlowStatementsTool::http_handler(arguments, client).await
            }
            GetCompanyProfileTool::NAME => {
                GetCompanyProfileTool::http_handler(arguments, client).await
            }
            GetRatiosTool::NAME => GetRatiosTool::http_handler(arguments, client).await,
            GetEnterpriseValueTool::NAME => {
                GetEnterpriseValueTool::http_handler(arguments, client).await
            }
            SearchCompaniesByNameTool::NAME => {
                SearchCompaniesByNameTool::http_handler(arguments, client).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(FmpClient::new("test-key").unwrap()))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"get_income_statements"));
        assert!(names.contains(&"get_balance_sheets"));
        assert!(names.contains(&"get_cash_flow_statements"));
        assert!(names.contains(&"get_company_profile"));
        assert!(names.contains(&"get_ratios"));
        assert!(names.contains(&"get_enterprise_value"));
        assert!(names.contains(&"search_companies_by_name"));
    }

    #[test]
    fn test_registry_names_are_unique() {
        let registry = test_registry();
        let names = registry.tool_names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_metadata_matches_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());
        for tool in tools {
            assert!(names.iter().any(|n| *n == tool.name.as_ref()));
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_dispatches() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/AAPL"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "symbol": "AAPL" }])),
            )
            .mount(&server)
            .await;

        let registry = ToolRegistry::new(Arc::new(
            FmpClient::with_base_url("test-key", server.uri()).unwrap(),
        ));
        let result = registry
            .call_tool("get_company_profile", serde_json::json!({ "ticker": "AAPL" }))
            .await
            .unwrap();
        assert_eq!(result.get("isError"), Some(&serde_json::json!(false)));
    }
}
