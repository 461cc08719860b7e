//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. All tools share a single [`FmpClient`] built once at startup;
//! the client is injected into every tool route instead of living in global
//! state, so tests can substitute a mock upstream.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/fmp/` with one file per
//! tool. Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (endpoint formatting + fetch)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::*,
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as FmpResult;
use crate::domains::tools::{FmpClient, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and holds the process-wide
/// FMP client shared by all tool invocations.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared FMP API client (connection pooling, fixed timeout).
    client: Arc<FmpClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(config: Config) -> FmpResult<Self> {
        let config = Arc::new(config);
        let client = Arc::new(FmpClient::new(&config.credentials.fmp_api_key)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared FMP client.
    pub fn client(&self) -> &Arc<FmpClient> {
        &self.client
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Dispatches through the ToolRegistry; each tool's http_handler lives in
    /// its own file under `domains/tools/definitions/fmp/`.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.client.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Financial Modeling Prep MCP server. Provides tools for company \
                 financial statements, profiles, ratios, enterprise values, and \
                 company search."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_construction() {
        let server = McpServer::new(Config::new("test-key")).unwrap();
        assert_eq!(server.name(), "fmp-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_router_has_all_tools() {
        let server = McpServer::new(Config::new("test-key")).unwrap();
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 7);
    }
}
