//! Tool definitions module.
//!
//! Each tool is defined in its own file for better maintainability.

pub mod fmp;

pub use fmp::{
    GetBalanceSheetsTool, GetCashFlowStatementsTool, GetCompanyProfileTool,
    GetEnterpriseValueTool, GetIncomeStatementsTool, GetRatiosTool, SearchCompaniesByNameTool,
};
