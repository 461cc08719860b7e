//! FMP MCP Server Library
//!
//! This crate implements a Model Context Protocol (MCP) server that exposes
//! the Financial Modeling Prep (FMP) REST API as a set of callable tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the
//!   main server, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the FMP tools that can be executed by clients, plus the
//!     shared retry-wrapped HTTP client they all delegate to
//!
//! # Example
//!
//! ```rust,no_run
//! use fmp_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
