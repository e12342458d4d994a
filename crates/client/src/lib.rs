//! catchpoint_client - client and CLI for the Catchpoint pull REST API.
//!
//! The client authenticates with OAuth2 client credentials, issues read-only
//! GET requests for performance charts, favorite charts, and monitoring
//! nodes, and returns the API's JSON payloads unchanged.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod time;

pub use client::CatchpointClient;
pub use config::Config;
pub use error::{Error, Result};
pub use time::TimeSpec;
