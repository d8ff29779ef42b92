//! Build a settings for an object that implements `Deserialize`
//!
//! ---
//! The configuration is composed from several sources, merged in order:
//!
//! 1. the file located at the path described in the environment variable
//!    `CLOCK_CONFIG_PATH` (`base_config/config.toml` by default). It is
//!    optional so that binaries can run on defaults alone.
//! 2. the file located at `CLOCK_CONFIG_OVERRIDE_PATH` (`config/config.toml` by
//!    default), if it exists.
//! 3. the user configuration directory of the application, if it exists.
//! 4. the environment variables prefixed with `env_prefix`, override if
//!    duplicated.
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Merge the settings sources and deserialize them into `T`
pub fn build_clock_settings<T: DeserializeOwned>(
    app_name: &str,
    env_prefix: &str,
) -> Result<T, config::ConfigError> {
    let mut builder = config::Config::builder();
    let config_path = std::env::var("CLOCK_CONFIG_PATH")
        .unwrap_or_else(|_| "base_config/config.toml".to_string());

    builder = builder.add_source(config::File::with_name(&config_path).required(false));

    let config_override_path = std::env::var("CLOCK_CONFIG_OVERRIDE_PATH")
        .unwrap_or_else(|_| "config/config.toml".to_string());

    if Path::new(&config_override_path).is_file() {
        builder = builder.add_source(config::File::with_name(&config_override_path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "MassaLabs", app_name) {
        // Portable user config loading
        let user_config_path = proj_dirs.config_dir().join("config.toml");
        if user_config_path.is_file() {
            builder = builder.add_source(config::File::from(user_config_path));
        }
    }

    builder
        .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
        .build()?
        .try_deserialize()
}
