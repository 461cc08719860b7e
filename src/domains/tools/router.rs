//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them, injecting the shared FMP client into every route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::fmp::FmpClient;
use super::definitions::{
    GetBalanceSheetsTool, GetCashFlowStatementsTool, GetCompanyProfileTool,
    GetEnterpriseValueTool, GetIncomeStatementsTool, GetRatiosTool, SearchCompaniesByNameTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<FmpClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetIncomeStatementsTool::create_route(client.clone()))
        .with_route(GetBalanceSheetsTool::create_route(client.clone()))
        .with_route(GetCashFlowStatementsTool::create_route(client.clone()))
        .with_route(GetCompanyProfileTool::create_route(client.clone()))
        .with_route(GetRatiosTool::create_route(client.clone()))
        .with_route(GetEnterpriseValueTool::create_route(client.clone()))
        .with_route(SearchCompaniesByNameTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_client() -> Arc<FmpClient> {
        Arc::new(FmpClient::new("test-key").unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_income_statements"));
        assert!(names.contains(&"get_balance_sheets"));
        assert!(names.contains(&"get_cash_flow_statements"));
        assert!(names.contains(&"get_company_profile"));
        assert!(names.contains(&"get_ratios"));
        assert!(names.contains(&"get_enterprise_value"));
        assert!(names.contains(&"search_companies_by_name"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
