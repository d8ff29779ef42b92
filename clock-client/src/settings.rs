// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Build here the default client settings from the configuration file toml
use clock_models::config::build_clock_settings;
use serde::Deserialize;
use std::path::PathBuf;

lazy_static::lazy_static! {
    pub static ref SETTINGS: Settings = build_clock_settings("clock-client", "CLOCK_CLIENT")
        .unwrap_or_else(|err| {
            tracing::warn!("could not load client settings, using defaults: {}", err);
            Settings::default()
        });
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    /// JSON snapshot of the current clock params
    pub params_path: PathBuf,
    /// address submitting the proposals when `--from` is not given
    pub from: Option<String>,
    /// denomination expected for proposal deposits, any if `None`
    pub deposit_denom: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            params_path: "config/clock_params.json".into(),
            from: None,
            deposit_denom: None,
        }
    }
}

#[cfg(test)]
#[test]
fn test_load_client_config() {
    let _ = *SETTINGS;
}
