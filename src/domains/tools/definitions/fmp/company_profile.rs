//! Company profile tool.

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

/// Parameters for the company profile tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompanyProfileParams {
    /// Stock ticker symbol.
    #[schemars(description = "Stock ticker symbol, e.g. 'AAPL'")]
    pub ticker: String,
}

/// Company profile tool implementation.
pub struct GetCompanyProfileTool;

impl GetCompanyProfileTool {
    pub const NAME: &'static str = "get_company_profile";

    pub const DESCRIPTION: &'static str =
        "Fetch company profile, sector, industry, description, etc.";

    fn endpoint(params: &CompanyProfileParams) -> String {
        format!("profile/{}", params.ticker)
    }

    pub async fn execute(params: &CompanyProfileParams, client: &FmpClient) -> CallToolResult {
        info!("Fetching company profile for {}", params.ticker);
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
        let params: CompanyProfileParams =
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
            input_schema: cached_schema_for_type::<CompanyProfileParams>(),
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
                let params: CompanyProfileParams =
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
    use rmcp::model::RawContent;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_endpoint_has_no_query() {
        let params: CompanyProfileParams = serde_json::from_str(r#"{"ticker": "AAPL"}"#).unwrap();
        assert_eq!(GetCompanyProfileTool::endpoint(&params), "profile/AAPL");
    }

    #[tokio::test]
    async fn test_execute_returns_upstream_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/AAPL"))
            .and(query_param("apikey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "symbol": "AAPL", "sector": "Technology" }
            ])))
            .mount(&server)
            .await;

        let client = FmpClient::with_base_url("test-key", server.uri()).unwrap();
        let params: CompanyProfileParams = serde_json::from_str(r#"{"ticker": "AAPL"}"#).unwrap();
        let result = GetCompanyProfileTool::execute(&params, &client).await;

        assert!(!result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("Technology"));
        } else {
            panic!("expected text content");
        }
    }
}
