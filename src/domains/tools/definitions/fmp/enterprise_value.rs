//! Enterprise value tool.

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
use super::common::{default_limit, json_result};

/// Parameters for the enterprise value tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EnterpriseValueParams {
    /// Stock ticker symbol.
    #[schemars(description = "Stock ticker symbol, e.g. 'AAPL'")]
    pub ticker: String,

    /// Number of periods to return (default: 4).
    #[schemars(description = "Number of periods to return (default: 4)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Enterprise value tool implementation.
pub struct GetEnterpriseValueTool;

impl GetEnterpriseValueTool {
    pub const NAME: &'static str = "get_enterprise_value";

    pub const DESCRIPTION: &'static str = "Fetch enterprise value metrics for a company.";

    fn endpoint(params: &EnterpriseValueParams) -> String {
        format!("enterprise-values/{}?limit={}", params.ticker, params.limit)
    }

    pub async fn execute(params: &EnterpriseValueParams, client: &FmpClient) -> CallToolResult {
        info!("Fetching enterprise values for {}", params.ticker);
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
        let params: EnterpriseValueParams =
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
            input_schema: cached_schema_for_type::<EnterpriseValueParams>(),
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
                let params: EnterpriseValueParams =
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
    fn test_params_default_limit() {
        let params: EnterpriseValueParams =
            serde_json::from_str(r#"{"ticker": "AMZN"}"#).unwrap();
        assert_eq!(params.limit, 4);
    }

    #[test]
    fn test_endpoint() {
        let params: EnterpriseValueParams =
            serde_json::from_str(r#"{"ticker": "AMZN"}"#).unwrap();
        assert_eq!(
            GetEnterpriseValueTool::endpoint(&params),
            "enterprise-values/AMZN?limit=4"
        );
    }
}
