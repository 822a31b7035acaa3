//! # weather-time-agent
//!
//! A small ADK-Rust agent that answers questions about the weather and the
//! current time in a city.
//!
//! ## Overview
//!
//! The crate wires two function tools into an LLM agent and hands it to the
//! ADK launcher:
//!
//! - [`tools::weather_tool`] - `get_weather`, a fixed report for New York
//! - [`tools::time_tool`] - `get_current_time`, the wall-clock time in New York
//! - [`agent::build_agent`] - the `weather_time_agent` root agent
//! - [`launcher::launch`] - console or web server mode via `adk-cli`
//!
//! Tool handlers never fail for an unknown city. They report it in-band as
//! `{"status": "error", "error_message": ...}` so the model can tell the user.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use weather_time_agent::{agent, cli, config::AgentConfig, launcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AgentConfig::from_env();
//!     let model = agent::create_model(&config)?;
//!     let root = agent::build_agent(model)?;
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     if cli::parse(args.as_slice())?.is_some() {
//!         launcher::launch(root).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod telemetry;
pub mod tools;

pub use error::BootstrapError;
pub use tools::{CityArgs, ToolResult};
