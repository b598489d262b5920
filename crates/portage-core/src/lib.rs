//! Cross-service plumbing shared by the portage workspace: configuration
//! loading and tracing setup.

pub mod config;
pub mod tracing;
