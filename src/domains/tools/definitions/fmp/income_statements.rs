//! Income statements tool.
//!
//! Fetches the latest income statements for a company from the FMP
//! `income-statement` endpoint.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::client::FmpClient;
use super::common::{default_limit, default_period, json_result};

/// Parameters for the income statements tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IncomeStatementsParams {
    /// Stock ticker symbol.
    #[schemars(description = "Stock ticker symbol, e.g. 'AAPL'")]
    pub ticker: String,

    /// Number of statements to return (default: 4).
    #[schemars(description = "Number of statements to return (default: 4)")]
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Reporting period (default: "annual").
    #[schemars(description = "Reporting period: 'annual' or 'quarter' (default: 'annual')")]
    #[serde(default = "default_period")]
    pub period: String,
}

/// Income statements tool implementation.
pub struct GetIncomeStatementsTool;

impl GetIncomeStatementsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_income_statements";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch latest income statements for a company.";

    /// Format the upstream endpoint from the parameters.
    fn endpoint(params: &IncomeStatementsParams) -> String {
        format!(
            "income-statement/{}?period={}&limit={}",
            params.ticker, params.period, params.limit
        )
    }

    /// Execute the tool logic.
    pub async fn execute(params: &IncomeStatementsParams, client: &FmpClient) -> CallToolResult {
        info!("Fetching income statements for {}", params.ticker);
        let payload = client
            .fetch(&Self::endpoint(params), FmpClient::DEFAULT_RETRIES)
            .await;
        json_result(payload)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<FmpClient>,
    ) -> Result<serde_json::Value, String> {
        let params: IncomeStatementsParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))?;

        let result = Self::execute(&params, &client).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<IncomeStatementsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(client: Arc<FmpClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: IncomeStatementsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let json = r#"{"ticker": "AAPL"}"#;
        let params: IncomeStatementsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.limit, 4);
        assert_eq!(params.period, "annual");
    }

    #[test]
    fn test_endpoint_with_defaults() {
        let params: IncomeStatementsParams =
            serde_json::from_str(r#"{"ticker": "AAPL"}"#).unwrap();
        assert_eq!(
            GetIncomeStatementsTool::endpoint(&params),
            "income-statement/AAPL?period=annual&limit=4"
        );
    }

    #[test]
    fn test_endpoint_with_overrides() {
        let params: IncomeStatementsParams =
            serde_json::from_str(r#"{"ticker": "MSFT", "limit": 8, "period": "quarter"}"#).unwrap();
        assert_eq!(
            GetIncomeStatementsTool::endpoint(&params),
            "income-statement/MSFT?period=quarter&limit=8"
        );
    }
}
