//! Company search tool.
//!
//! Searches companies by name, fixed to the NASDAQ exchange and the first ten
//! matches - the limit and exchange are part of the endpoint, not parameters.

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

/// Parameters for the company search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCompaniesParams {
    /// Company name to search for.
    #[schemars(description = "Company name to search for, e.g. 'Apple'")]
    pub query: String,
}

/// Company search tool implementation.
pub struct SearchCompaniesByNameTool;

impl SearchCompaniesByNameTool {
    pub const NAME: &'static str = "search_companies_by_name";

    pub const DESCRIPTION: &'static str = "Search companies by name on NASDAQ exchange.";

    fn endpoint(params: &SearchCompaniesParams) -> String {
        format!("search?query={}&limit=10&exchange=NASDAQ", params.query)
    }

    pub async fn execute(params: &SearchCompaniesParams, client: &FmpClient) -> CallToolResult {
        info!("Searching companies matching '{}'", params.query);
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
        let params: SearchCompaniesParams =
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
            input_schema: cached_schema_for_type::<SearchCompaniesParams>(),
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
                let params: SearchCompaniesParams =
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
    fn test_endpoint() {
        let params: SearchCompaniesParams =
            serde_json::from_str(r#"{"query": "Apple"}"#).unwrap();
        assert_eq!(
            SearchCompaniesByNameTool::endpoint(&params),
            "search?query=Apple&limit=10&exchange=NASDAQ"
        );
    }

    #[test]
    fn test_endpoint_query_carries_own_query_string() {
        // The fetcher appends the key with '&' for endpoints like this one.
        let params: SearchCompaniesParams =
            serde_json::from_str(r#"{"query": "Micro"}"#).unwrap();
        assert!(SearchCompaniesByNameTool::endpoint(&params).contains('?'));
    }
}
