//! Financial Modeling Prep tools.
//!
//! One file per tool, mirroring the upstream endpoint catalog, plus:
//! - `client.rs` - the shared retry-wrapped HTTP client all tools use
//! - `common.rs` - parameter defaults and result helpers

pub mod client;
pub mod common;

pub mod balance_sheets;
pub mod cash_flow_statements;
pub mod company_profile;
pub mod enterprise_value;
pub mod income_statements;
pub mod ratios;
pub mod search_companies;

pub use client::FmpClient;

pub use balance_sheets::GetBalanceSheetsTool;
pub use cash_flow_statements::GetCashFlowStatementsTool;
pub use company_profile::GetCompanyProfileTool;
pub use enterprise_value::GetEnterpriseValueTool;
pub use income_statements::GetIncomeStatementsTool;
pub use ratios::GetRatiosTool;
pub use search_companies::SearchCompaniesByNameTool;
