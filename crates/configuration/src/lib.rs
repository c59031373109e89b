//! # TradeLens Configuration
//!
//! This crate owns the strongly-typed runtime settings for the workspace: the
//! values the analytics collaborators read once at startup and then pass into
//! the pure engine as plain arguments.
//!
//! As a Layer 0 crate it knows nothing about the analytics built on top of it.

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalyticsSettings, Config};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Loads and validates the configuration from a specific TOML file.
///
/// Split out from [`load_config`] so the binary can honour a `--config` flag.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct.
    let config = builder.try_deserialize::<Config>()?;
    config.analytics.validate()?;

    tracing::debug!(path, "Loaded analytics configuration");
    Ok(config)
}
