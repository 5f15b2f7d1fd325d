#[cfg(feature = "cli")]
pub mod cli;
pub mod search_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use search_config::SearchConfig;
