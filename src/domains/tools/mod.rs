//! Tools domain module.
//!
//! This module handles all tool-related functionality for the FMP MCP server.
//! Every tool formats exactly one upstream endpoint from its parameters and
//! delegates to the shared [`FmpClient`].
//!
//! ## Architecture
//!
//! - `definitions/fmp/` - Individual tool implementations (one file per tool)
//!   plus the shared client
//! - `router.rs` - Dynamic ToolRouter builder for the STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/fmp/` (e.g., `my_tool.rs`)
//! 2. Define params, endpoint(), execute(), and http_handler()
//! 3. Export in `definitions/fmp/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod registry;
pub mod router;

pub use definitions::fmp::FmpClient;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
