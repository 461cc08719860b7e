//! Financial ratios tool.

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
use super::common::json_result;

/// Parameters for the financial ratios tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RatiosParams {
    /// Stock ticker symbol.
    #[schemars(description = "Stock ticker symbol, e.g. 'AAPL'")]
    pub ticker: String,
}

/// Financial ratios tool implementation.
pub struct GetRatiosTool;

impl GetRatiosTool {
    pub const NAME: &'static str = "get_ratios";

    pub const DESCRIPTION: &'static str =
        "Fetch financial ratios for a company (e.g., PE ratio, ROE).";

    fn endpoint(params: &RatiosParams) -> String {
        format!("ratios/{}", params.ticker)
    }

    pub async fn execute(params: &RatiosParams, client: &FmpClient) -> CallToolResult {
        info!("Fetching financial ratios for {}", params.ticker);
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
        let params: RatiosParams =
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
            input_schema: cached_schema_for_type::<RatiosParams>(),
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
                let params: RatiosParams = serde_json::from_value(serde_json::Value::Object(args))
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
    fn test_endpoint() {
        let params: RatiosParams = serde_json::from_str(r#"{"ticker": "NVDA"}"#).unwrap();
        assert_eq!(GetRatiosTool::endpoint(&params), "ratios/NVDA");
    }

    #[test]
    fn test_missing_ticker_is_rejected() {
        let result: Result<RatiosParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
