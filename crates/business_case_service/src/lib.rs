pub mod config;
pub mod error;
pub mod generate;
pub mod llm_client;
pub mod logging;
pub mod server;
